//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO storage dependencies (only serde for serialization).

mod entity;
mod complaint;
mod username;

pub use entity::{Entity, DomainError, DomainResult};
pub use complaint::{Complaint, ComplaintId, NewComplaint, Status};
pub use username::Username;
