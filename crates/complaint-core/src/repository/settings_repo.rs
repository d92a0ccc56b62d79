//! Settings Repository
//!
//! Scalar settings stored as plain strings.

use super::traits::KeyValueStore;
use crate::config::StoreConfig;
use crate::domain::{DomainResult, Username};

pub struct SettingsRepository<S: KeyValueStore> {
    store: S,
    config: StoreConfig,
}

impl<S: KeyValueStore> SettingsRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store, config: StoreConfig::default() }
    }

    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Stored name, or the configured default when unset or empty
    pub fn get_username(&self) -> DomainResult<String> {
        Ok(self
            .store
            .get(&self.config.username_key)?
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.config.default_username.clone()))
    }

    /// Trim and save. Blank names are rejected and nothing is written.
    pub fn set_username(&self, raw: &str) -> DomainResult<Username> {
        let name = Username::parse(raw).inspect_err(|_| log::warn!("Rejected blank username"))?;
        self.store.set(&self.config.username_key, name.as_str())?;
        log::debug!("Username set to {}", name);
        Ok(name)
    }
}
