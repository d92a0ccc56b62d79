//! Complaint Entity
//!
//! A user-submitted issue report with a two-state lifecycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::{DomainError, DomainResult, Entity};

/// Identifier of a complaint, e.g. `CMS-4821`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(String);

impl ComplaintId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build an id from the configured prefix and a numeric suffix
    pub fn from_parts(prefix: &str, n: u32) -> Self {
        Self(format!("{}-{}", prefix, n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Complaint status. Only ever flipped, never assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Pending,
    Resolved,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Resolved => "Resolved",
        }
    }

    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            Status::Pending => Status::Resolved,
            Status::Resolved => Status::Pending,
        }
    }

    /// CSS class of the status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Pending => "status-badge status-pending",
            Status::Resolved => "status-badge status-resolved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored complaint record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    pub subject: String,
    pub category: String,
    pub priority: String,
    pub description: String,
    pub status: Status,
    /// Creation day, immutable
    pub date: NaiveDate,
}

impl Complaint {
    /// Build a fresh Pending record from validated form fields
    pub fn new(id: ComplaintId, draft: NewComplaint, date: NaiveDate) -> Self {
        Self {
            id,
            subject: draft.subject,
            category: draft.category,
            priority: draft.priority,
            description: draft.description,
            status: Status::Pending,
            date,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }

    /// "Category • Priority" line shown on history cards
    pub fn meta_line(&self) -> String {
        format!("{} \u{2022} {}", self.category, self.priority)
    }

    /// Case-insensitive match against subject, description and id.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.subject.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.id.as_str().to_lowercase().contains(needle)
    }
}

impl Entity for Complaint {
    type Id = ComplaintId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Form fields of a complaint being submitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewComplaint {
    pub subject: String,
    pub category: String,
    pub priority: String,
    pub description: String,
}

impl NewComplaint {
    pub fn new(
        subject: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            category: category.into(),
            priority: priority.into(),
            description: description.into(),
        }
    }

    /// Trim every field and reject a blank subject or description
    pub fn validated(self) -> DomainResult<Self> {
        let draft = Self {
            subject: self.subject.trim().to_string(),
            category: self.category.trim().to_string(),
            priority: self.priority.trim().to_string(),
            description: self.description.trim().to_string(),
        };
        if draft.subject.is_empty() {
            return Err(DomainError::InvalidInput("subject is required".to_string()));
        }
        if draft.description.is_empty() {
            return Err(DomainError::InvalidInput("description is required".to_string()));
        }
        Ok(draft)
    }
}
