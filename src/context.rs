//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// The four views of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    NewComplaint,
    History,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::NewComplaint, Tab::History, Tab::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::NewComplaint => "New Complaint",
            Tab::History => "History",
            Tab::Settings => "Settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard Overview",
            Tab::NewComplaint => "Submit a Complaint",
            Tab::History => "Complaint History",
            Tab::Settings => "Settings",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload everything from storage - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload everything from storage - write
    set_reload_trigger: WriteSignal<u32>,
    /// Visible view - read
    pub active_tab: ReadSignal<Tab>,
    /// Visible view - write
    set_active_tab: WriteSignal<Tab>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        active_tab: (ReadSignal<Tab>, WriteSignal<Tab>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            active_tab: active_tab.0,
            set_active_tab: active_tab.1,
        }
    }

    /// Re-read storage and recompute every view
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn show(&self, tab: Tab) {
        self.set_active_tab.set(tab);
    }
}
