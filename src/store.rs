//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use complaint_core::Complaint;

/// Everything the views derive from, reloaded from storage after each mutation
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full collection, newest first
    pub complaints: Vec<Complaint>,
    /// Name shown in the header
    pub username: String,
    /// Last storage failure, shown as a banner
    pub load_error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
