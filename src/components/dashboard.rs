//! Dashboard Component
//!
//! Summary counters above the recent-activity table.

use leptos::prelude::*;

use complaint_core::views;

use super::RecentTable;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| store.complaints().with(|all| views::stats(all)));

    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <span class="stat-label">"Total Complaints"</span>
                <span class="stat-value">{move || stats.get().total}</span>
            </div>
            <div class="stat-card pending">
                <span class="stat-label">"Pending"</span>
                <span class="stat-value">{move || stats.get().pending}</span>
            </div>
            <div class="stat-card resolved">
                <span class="stat-label">"Resolved"</span>
                <span class="stat-value">{move || stats.get().resolved}</span>
            </div>
        </div>

        <RecentTable />
    }
}
