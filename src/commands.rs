//! Storage Command Wrappers
//!
//! The only place the UI touches the repositories. Errors are flattened to
//! strings for display.

use complaint_core::{
    Complaint, ComplaintId, ComplaintRepository, DeleteOutcome, NewComplaint, Repository,
    SettingsRepository,
};

use crate::storage::{BrowserStorage, MathRandomIds};

fn complaint_repo() -> Result<ComplaintRepository<BrowserStorage>, String> {
    let store = BrowserStorage::local().map_err(|e| e.to_string())?;
    Ok(ComplaintRepository::new(store, MathRandomIds))
}

fn settings_repo() -> Result<SettingsRepository<BrowserStorage>, String> {
    let store = BrowserStorage::local().map_err(|e| e.to_string())?;
    Ok(SettingsRepository::new(store))
}

// ========================
// Complaints
// ========================

pub fn list_complaints() -> Result<Vec<Complaint>, String> {
    complaint_repo()?.list().map_err(|e| e.to_string())
}

pub fn create_complaint(draft: NewComplaint) -> Result<Complaint, String> {
    complaint_repo()?.create(draft).map_err(|e| e.to_string())
}

/// `None` when the complaint no longer exists
pub fn toggle_status(id: &ComplaintId) -> Result<Option<Complaint>, String> {
    complaint_repo()?.toggle_status(id).map_err(|e| e.to_string())
}

pub fn delete_complaint(
    id: &ComplaintId,
    confirm: impl FnOnce() -> bool,
) -> Result<DeleteOutcome, String> {
    complaint_repo()?.delete_with(id, confirm).map_err(|e| e.to_string())
}

// ========================
// Settings
// ========================

pub fn get_username() -> Result<String, String> {
    settings_repo()?.get_username().map_err(|e| e.to_string())
}

/// Returns the trimmed name that was saved
pub fn set_username(name: &str) -> Result<String, String> {
    settings_repo()?
        .set_username(name)
        .map(|saved| saved.into_inner())
        .map_err(|e| e.to_string())
}
