//! Complaint Repository
//!
//! Stores the whole collection as one JSON array under a single key,
//! newest first. Every mutation reloads the array, edits it and writes it
//! back in full.

use std::collections::HashSet;

use super::clock::{Clock, SystemClock};
use super::ids::IdSource;
use super::traits::{DeleteOutcome, KeyValueStore, Repository, SearchableRepository};
use crate::config::{CorruptPolicy, StoreConfig};
use crate::domain::{Complaint, ComplaintId, DomainError, DomainResult, NewComplaint};
use crate::views;

pub struct ComplaintRepository<S: KeyValueStore> {
    store: S,
    config: StoreConfig,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl<S: KeyValueStore> ComplaintRepository<S> {
    pub fn new(store: S, ids: impl IdSource + 'static) -> Self {
        Self {
            store,
            config: StoreConfig::default(),
            clock: Box::new(SystemClock),
            ids: Box::new(ids),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load(&self) -> DomainResult<Vec<Complaint>> {
        let key = &self.config.complaints_key;
        let Some(raw) = self.store.get(key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Option<Vec<Complaint>>>(&raw) {
            Ok(complaints) => Ok(complaints.unwrap_or_default()),
            Err(e) => match self.config.corrupt_policy {
                CorruptPolicy::Reset => {
                    log::warn!("Ignoring unreadable '{}' ({}), treating as empty", key, e);
                    Ok(Vec::new())
                }
                CorruptPolicy::Fail => Err(DomainError::Corrupt {
                    key: key.clone(),
                    reason: e.to_string(),
                }),
            },
        }
    }

    fn save(&self, complaints: &[Complaint]) -> DomainResult<()> {
        let raw = serde_json::to_string(complaints)?;
        self.store.set(&self.config.complaints_key, &raw)
    }

    /// Draw ids until one is not taken by `existing`
    fn next_id(&self, existing: &[Complaint]) -> DomainResult<ComplaintId> {
        let taken: HashSet<&ComplaintId> = existing.iter().map(|c| &c.id).collect();
        for _ in 0..self.config.max_id_attempts.max(1) {
            let n = self.ids.next(self.config.id_range);
            let id = ComplaintId::from_parts(&self.config.id_prefix, n);
            if !taken.contains(&id) {
                return Ok(id);
            }
            log::debug!("Id {} already taken, drawing again", id);
        }
        Err(DomainError::Conflict(format!(
            "no free id after {} attempts",
            self.config.max_id_attempts
        )))
    }

    /// Delete after asking `confirm`; a refusal leaves storage untouched
    pub fn delete_with(
        &self,
        id: &ComplaintId,
        confirm: impl FnOnce() -> bool,
    ) -> DomainResult<DeleteOutcome> {
        if !confirm() {
            log::debug!("Delete of {} declined", id);
            return Ok(DeleteOutcome::Declined);
        }

        let mut complaints = self.load()?;
        let Some(pos) = complaints.iter().position(|c| &c.id == id) else {
            return Ok(DeleteOutcome::NotFound);
        };
        complaints.remove(pos);
        self.save(&complaints)?;
        log::debug!("Deleted complaint {}", id);
        Ok(DeleteOutcome::Deleted)
    }

    /// Flip Pending/Resolved. `None` when no record has the id.
    pub fn toggle_status(&self, id: &ComplaintId) -> DomainResult<Option<Complaint>> {
        let mut complaints = self.load()?;
        let Some(complaint) = complaints.iter_mut().find(|c| &c.id == id) else {
            return Ok(None);
        };
        complaint.status = complaint.status.toggled();
        let updated = complaint.clone();
        self.save(&complaints)?;
        log::debug!("Complaint {} is now {}", id, updated.status);
        Ok(Some(updated))
    }
}

impl<S: KeyValueStore> Repository<Complaint> for ComplaintRepository<S> {
    type Draft = NewComplaint;

    fn create(&self, draft: NewComplaint) -> DomainResult<Complaint> {
        let draft = draft.validated()?;
        let mut complaints = self.load()?;
        let id = self.next_id(&complaints)?;
        let complaint = Complaint::new(id, draft, self.clock.today());
        complaints.insert(0, complaint.clone());
        self.save(&complaints)?;
        log::debug!("Created complaint {} ({} total)", complaint.id, complaints.len());
        Ok(complaint)
    }

    fn find_by_id(&self, id: &ComplaintId) -> DomainResult<Option<Complaint>> {
        Ok(self.load()?.into_iter().find(|c| &c.id == id))
    }

    fn list(&self) -> DomainResult<Vec<Complaint>> {
        self.load()
    }

    fn update(&self, entity: &Complaint) -> DomainResult<Complaint> {
        let mut complaints = self.load()?;
        let slot = complaints
            .iter_mut()
            .find(|c| c.id == entity.id)
            .ok_or_else(|| DomainError::NotFound(format!("complaint {}", entity.id)))?;
        // Status only moves through toggle_status
        if entity.status != slot.status {
            return Err(DomainError::InvalidInput(format!(
                "status of {} can only be toggled",
                entity.id
            )));
        }
        // Creation day is fixed
        *slot = Complaint { date: slot.date, ..entity.clone() };
        let updated = slot.clone();
        self.save(&complaints)?;
        Ok(updated)
    }

    fn delete(&self, id: &ComplaintId) -> DomainResult<DeleteOutcome> {
        self.delete_with(id, || true)
    }
}

impl<S: KeyValueStore> SearchableRepository<Complaint> for ComplaintRepository<S> {
    fn search(&self, query: &str) -> DomainResult<Vec<Complaint>> {
        Ok(views::search(&self.load()?, query))
    }
}
