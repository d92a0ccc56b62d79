//! Complaint Desk Core
//!
//! Layered architecture:
//! - domain: Complaint and Username entities, errors
//! - repository: key-value storage backends and the repositories on top
//! - views: pure derived views (stats, recent, history, search)
//! - config: storage keys and policies

pub mod config;
pub mod domain;
pub mod repository;
pub mod views;

pub use config::{CorruptPolicy, StoreConfig};
pub use domain::{
    Complaint, ComplaintId, DomainError, DomainResult, Entity, NewComplaint, Status, Username,
};
pub use repository::{
    Clock, ComplaintRepository, DeleteOutcome, FileStore, FixedClock, IdSource, KeyValueStore,
    MemoryStore, Repository, SearchableRepository, SequenceIds, SettingsRepository, SystemClock,
};
pub use views::{ListView, Stats};
