//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod kv;
mod clock;
mod ids;
mod complaint_repo;
mod settings_repo;

#[cfg(test)]
mod tests;

pub use traits::{DeleteOutcome, KeyValueStore, Repository, SearchableRepository};
pub use kv::{FileStore, MemoryStore};
pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::{IdSource, SequenceIds};
pub use complaint_repo::ComplaintRepository;
pub use settings_repo::SettingsRepository;
