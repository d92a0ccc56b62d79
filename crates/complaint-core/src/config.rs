//! Store Configuration
//!
//! Storage keys, defaults and policies. `StoreConfig::default()` matches the
//! layout the browser app has always written.

use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;

/// What to do when a stored collection cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Log a warning and treat the value as an empty collection
    #[default]
    Reset,
    /// Return `DomainError::Corrupt`
    Fail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub complaints_key: String,
    pub username_key: String,
    pub default_username: String,
    pub id_prefix: String,
    /// Numeric ids are drawn from `0..id_range`
    pub id_range: u32,
    /// Regeneration attempts before giving up on a colliding id
    pub max_id_attempts: u32,
    pub recent_limit: usize,
    pub corrupt_policy: CorruptPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            complaints_key: "cms_complaints".to_string(),
            username_key: "cms_username".to_string(),
            default_username: "Danny".to_string(),
            id_prefix: "CMS".to_string(),
            id_range: 10_000,
            max_id_attempts: 64,
            recent_limit: 5,
            corrupt_policy: CorruptPolicy::Reset,
        }
    }
}

impl StoreConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep defaults
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
