//! Repository Integration Tests
//!
//! Tests for ComplaintRepository and SettingsRepository over in-memory and
//! file-backed stores.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use chrono::NaiveDate;

    use crate::config::{CorruptPolicy, StoreConfig};
    use crate::domain::{ComplaintId, DomainError, NewComplaint, Status};
    use crate::repository::{
        ComplaintRepository, DeleteOutcome, FileStore, FixedClock, IdSource, KeyValueStore,
        MemoryStore, Repository, SearchableRepository, SequenceIds, SettingsRepository,
    };
    use crate::views;

    /// Hands out pre-set numbers, then zeros
    struct ScriptedIds(RefCell<VecDeque<u32>>);

    impl ScriptedIds {
        fn new(values: &[u32]) -> Self {
            Self(RefCell::new(values.iter().copied().collect()))
        }
    }

    impl IdSource for ScriptedIds {
        fn next(&self, _bound: u32) -> u32 {
            self.0.borrow_mut().pop_front().unwrap_or(0)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn setup_repo() -> ComplaintRepository<MemoryStore> {
        ComplaintRepository::new(MemoryStore::new(), SequenceIds::starting_at(100))
            .with_clock(FixedClock(today()))
    }

    fn leak() -> NewComplaint {
        NewComplaint::new("Leak", "Plumbing", "High", "Pipe leak in unit 4")
    }

    #[test]
    fn test_list_empty_storage() {
        let repo = setup_repo();
        assert!(repo.list().expect("List failed").is_empty());
    }

    #[test]
    fn test_create_and_toggle_scenario() {
        let repo = setup_repo();

        let created = repo.create(leak()).expect("Failed to create");
        let listed = repo.list().expect("List failed");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].subject, "Leak");
        assert_eq!(listed[0].status, Status::Pending);

        repo.toggle_status(&created.id).expect("Toggle failed");
        assert_eq!(repo.list().unwrap()[0].status, Status::Resolved);
    }

    #[test]
    fn test_create_sets_defaults_and_prepends() {
        let repo = setup_repo();
        repo.create(NewComplaint::new("First", "Other", "Low", "one")).unwrap();
        let second = repo.create(NewComplaint::new("Second", "Other", "Low", "two")).unwrap();

        assert_eq!(second.status, Status::Pending);
        assert_eq!(second.date, today());
        assert_eq!(second.id.as_str(), "CMS-101");

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].subject, "Second");
        assert_eq!(listed[1].subject, "First");
    }

    #[test]
    fn test_create_rejects_blank_subject() {
        let repo = setup_repo();
        let err = repo.create(NewComplaint::new(" ", "Other", "Low", "text")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(repo.store().is_empty());
    }

    #[test]
    fn test_persisted_layout() {
        let repo = setup_repo();
        let created = repo.create(leak()).unwrap();

        let raw = repo.store().get("cms_complaints").unwrap().expect("Nothing stored");
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["id"], created.id.as_str());
        assert_eq!(json[0]["status"], "Pending");
        assert_eq!(json[0]["date"], "2026-10-17");
    }

    #[test]
    fn test_delete_removes_record() {
        let repo = setup_repo();
        let keep = repo.create(NewComplaint::new("Keep", "Other", "Low", "x")).unwrap();
        let gone = repo.create(NewComplaint::new("Gone", "Other", "Low", "y")).unwrap();

        assert_eq!(repo.delete(&gone.id).unwrap(), DeleteOutcome::Deleted);
        let listed = repo.list().unwrap();
        assert!(listed.iter().all(|c| c.id != gone.id));
        assert_eq!(listed[0].id, keep.id);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let repo = setup_repo();
        repo.create(leak()).unwrap();
        let before = repo.list().unwrap();

        let outcome = repo.delete(&ComplaintId::new("CMS-missing")).unwrap();
        assert_eq!(outcome, DeleteOutcome::NotFound);
        assert_eq!(repo.list().unwrap(), before);
    }

    #[test]
    fn test_declined_delete_leaves_storage_untouched() {
        let repo = setup_repo();
        let created = repo.create(leak()).unwrap();
        let raw_before = repo.store().get("cms_complaints").unwrap();

        let outcome = repo.delete_with(&created.id, || false).unwrap();
        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(repo.store().get("cms_complaints").unwrap(), raw_before);
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let repo = setup_repo();
        let created = repo.create(leak()).unwrap();

        let once = repo.toggle_status(&created.id).unwrap().expect("Should exist");
        assert_eq!(once.status, Status::Resolved);
        let twice = repo.toggle_status(&created.id).unwrap().expect("Should exist");
        assert_eq!(twice.status, Status::Pending);
    }

    #[test]
    fn test_toggle_missing_returns_none() {
        let repo = setup_repo();
        assert!(repo.toggle_status(&ComplaintId::new("CMS-1")).unwrap().is_none());
        assert!(repo.store().is_empty());
    }

    #[test]
    fn test_stats_invariant_across_mutations() {
        let repo = setup_repo();
        let a = repo.create(NewComplaint::new("A", "Other", "Low", "a")).unwrap();
        repo.create(NewComplaint::new("B", "Other", "Low", "b")).unwrap();
        repo.toggle_status(&a.id).unwrap();

        let s = views::stats(&repo.list().unwrap());
        assert_eq!(s.total, 2);
        assert_eq!(s.resolved, 1);
        assert_eq!(s.pending + s.resolved, s.total);
    }

    #[test]
    fn test_find_and_update() {
        let repo = setup_repo();
        let created = repo.create(leak()).unwrap();

        let mut found = repo.find_by_id(&created.id).unwrap().expect("Should exist");
        found.priority = "Low".to_string();
        found.date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let updated = repo.update(&found).expect("Update failed");

        assert_eq!(updated.priority, "Low");
        assert_eq!(updated.date, today());
    }

    #[test]
    fn test_update_cannot_set_status() {
        let repo = setup_repo();
        let created = repo.create(leak()).unwrap();
        let raw_before = repo.store().get("cms_complaints").unwrap();

        let mut changed = created.clone();
        changed.status = Status::Resolved;
        changed.subject = "Leak (edited)".to_string();

        let err = repo.update(&changed).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(repo.store().get("cms_complaints").unwrap(), raw_before);
        assert_eq!(repo.list().unwrap()[0].status, Status::Pending);
    }

    #[test]
    fn test_update_after_toggle_keeps_status() {
        let repo = setup_repo();
        let created = repo.create(leak()).unwrap();
        let mut resolved = repo.toggle_status(&created.id).unwrap().expect("Should exist");

        resolved.priority = "Medium".to_string();
        let updated = repo.update(&resolved).expect("Update failed");
        assert_eq!(updated.status, Status::Resolved);
        assert_eq!(updated.priority, "Medium");
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let repo = setup_repo();
        let created = repo.create(leak()).unwrap();
        repo.delete(&created.id).unwrap();

        assert!(matches!(repo.update(&created), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_search_through_repository() {
        let repo = setup_repo();
        repo.create(NewComplaint::new("Door", "Facilities", "High", "urgent fix needed")).unwrap();
        repo.create(leak()).unwrap();

        assert_eq!(repo.search("URGENT").unwrap().len(), 1);
        assert_eq!(repo.search("").unwrap().len(), 2);
    }

    #[test]
    fn test_colliding_id_is_redrawn() {
        let repo = ComplaintRepository::new(MemoryStore::new(), ScriptedIds::new(&[7, 7, 8]))
            .with_clock(FixedClock(today()));
        let first = repo.create(leak()).unwrap();
        let second = repo.create(leak()).unwrap();

        assert_eq!(first.id.as_str(), "CMS-7");
        assert_eq!(second.id.as_str(), "CMS-8");
    }

    #[test]
    fn test_exhausted_id_space_is_conflict() {
        let config = StoreConfig { id_range: 1, max_id_attempts: 3, ..StoreConfig::default() };
        let repo = ComplaintRepository::new(MemoryStore::new(), SequenceIds::default())
            .with_config(config);
        repo.create(leak()).unwrap();

        assert!(matches!(repo.create(leak()), Err(DomainError::Conflict(_))));
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_data_reset_policy() {
        let store = MemoryStore::new();
        store.set("cms_complaints", "{broken").unwrap();
        let repo = ComplaintRepository::new(store, SequenceIds::default());

        assert!(repo.list().unwrap().is_empty());
        repo.create(leak()).unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_data_fail_policy() {
        let store = MemoryStore::new();
        store.set("cms_complaints", "{broken").unwrap();
        let config = StoreConfig { corrupt_policy: CorruptPolicy::Fail, ..StoreConfig::default() };
        let repo = ComplaintRepository::new(store, SequenceIds::default()).with_config(config);

        assert!(matches!(repo.list(), Err(DomainError::Corrupt { .. })));
        assert!(repo.create(leak()).is_err());
        assert_eq!(repo.store().get("cms_complaints").unwrap().as_deref(), Some("{broken"));
    }

    #[test]
    fn test_null_value_is_empty() {
        let store = MemoryStore::new();
        store.set("cms_complaints", "null").unwrap();
        let repo = ComplaintRepository::new(store, SequenceIds::default());
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_username_default_and_update() {
        let settings = SettingsRepository::new(MemoryStore::new());
        assert_eq!(settings.get_username().unwrap(), "Danny");

        let saved = settings.set_username("  Ada Lovelace ").expect("Should save");
        assert_eq!(saved.as_str(), "Ada Lovelace");
        assert_eq!(settings.get_username().unwrap(), "Ada Lovelace");
    }

    #[test]
    fn test_blank_username_rejected() {
        let settings = SettingsRepository::new(MemoryStore::new());
        settings.set_username("Ada").unwrap();

        let err = settings.set_username("   ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(settings.get_username().unwrap(), "Ada");
    }

    #[test]
    fn test_repositories_share_one_store() {
        let store = Rc::new(MemoryStore::new());
        let complaints = ComplaintRepository::new(Rc::clone(&store), SequenceIds::default());
        let settings = SettingsRepository::new(Rc::clone(&store));

        complaints.create(leak()).unwrap();
        settings.set_username("Ada").unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_file_backed_repository_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cms.json");

        let created = {
            let repo = ComplaintRepository::new(FileStore::new(&path), SequenceIds::default())
                .with_clock(FixedClock(today()));
            repo.create(leak()).unwrap()
        };

        let reopened = ComplaintRepository::new(FileStore::new(&path), SequenceIds::default());
        let listed = reopened.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
    }
}
