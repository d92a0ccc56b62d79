//! Status Badge Component
//!
//! Colored pill for Pending / Resolved.

use leptos::prelude::*;

use complaint_core::Status;

#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    view! { <span class=status.css_class()>{status.as_str()}</span> }
}
