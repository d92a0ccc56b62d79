//! Recent Activity Table Component
//!
//! The newest few complaints, or a placeholder row when there are none.

use leptos::prelude::*;

use complaint_core::{views, ListView, StoreConfig};

use super::StatusBadge;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecentTable() -> impl IntoView {
    let store = use_app_store();
    let limit = StoreConfig::default().recent_limit;
    let recent = Memo::new(move |_| store.complaints().with(|all| views::recent(all, limit)));

    view! {
        <div class="recent-activity">
            <h2>"Recent Complaints"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Subject"</th>
                        <th>"Category"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || match recent.get() {
                        ListView::Empty => view! {
                            <tr>
                                <td colspan="5" class="empty-state">"No complaints found."</td>
                            </tr>
                        }.into_any(),
                        ListView::Rows(rows) => rows.into_iter().map(|c| view! {
                            <tr>
                                <td>{c.id.to_string()}</td>
                                <td>{c.subject}</td>
                                <td>{c.category}</td>
                                <td><StatusBadge status=c.status /></td>
                                <td>{c.date.to_string()}</td>
                            </tr>
                        }).collect_view().into_any(),
                    }}
                </tbody>
            </table>
        </div>
    }
}
