//! Browser Storage Backend
//!
//! `window.localStorage` behind the core `KeyValueStore` trait, and
//! `Math.random` as the id source.

use complaint_core::{DomainError, DomainResult, IdSource, KeyValueStore};
use wasm_bindgen::JsValue;

fn js_err(e: JsValue) -> DomainError {
    DomainError::Storage(format!("{:?}", e))
}

/// The page's localStorage
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> DomainResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| DomainError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.storage.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.storage.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        self.storage.remove_item(key).map_err(js_err)
    }
}

/// Uniform numbers from `Math.random()`
pub struct MathRandomIds;

impl IdSource for MathRandomIds {
    fn next(&self, bound: u32) -> u32 {
        (js_sys::Math::random() * f64::from(bound)).floor() as u32
    }
}
