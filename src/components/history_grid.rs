//! History Grid Component
//!
//! Searchable card grid over every complaint.

use leptos::prelude::*;

use complaint_core::{views, ListView};

use super::ComplaintCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HistoryGrid() -> impl IntoView {
    let store = use_app_store();
    let (term, set_term) = signal(String::new());

    let filtered = Memo::new(move |_| {
        let term = term.get();
        store.complaints().with(|all| views::history(&views::search(all, &term)))
    });

    view! {
        <div class="history-header">
            <input
                type="search"
                class="search-input"
                placeholder="Search by subject, description or ID..."
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
        </div>

        <div class="complaints-grid">
            {move || match filtered.get() {
                ListView::Empty => view! {
                    <p class="empty-state grid-empty">"No history available."</p>
                }.into_any(),
                ListView::Rows(rows) => rows
                    .into_iter()
                    .map(|complaint| view! { <ComplaintCard complaint=complaint /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
