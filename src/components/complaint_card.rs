//! Complaint Card Component
//!
//! One history card with status toggle and inline delete.

use leptos::prelude::*;

use complaint_core::{Complaint, DeleteOutcome};

use super::{DeleteConfirmButton, StatusBadge};
use crate::commands;
use crate::context::AppContext;

#[component]
pub fn ComplaintCard(complaint: Complaint) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let meta = complaint.meta_line();
    let toggle_label = if complaint.is_pending() { "Mark Resolved" } else { "Reopen" };

    let toggle_id = complaint.id.clone();
    let on_toggle = move |_| {
        match commands::toggle_status(&toggle_id) {
            Ok(Some(updated)) => log::info!("Complaint {} is now {}", updated.id, updated.status),
            Ok(None) => log::warn!("Complaint {} no longer exists", toggle_id),
            Err(e) => log::error!("Failed to toggle {}: {}", toggle_id, e),
        }
        ctx.reload();
    };

    let delete_id = complaint.id.clone();
    let on_answer = Callback::new(move |confirmed: bool| {
        match commands::delete_complaint(&delete_id, move || confirmed) {
            Ok(DeleteOutcome::Deleted) => {
                log::info!("Deleted complaint {}", delete_id);
                ctx.reload();
            }
            Ok(DeleteOutcome::Declined) => log::debug!("Kept complaint {}", delete_id),
            Ok(DeleteOutcome::NotFound) => {
                log::warn!("Complaint {} no longer exists", delete_id);
                ctx.reload();
            }
            Err(e) => log::error!("Failed to delete {}: {}", delete_id, e),
        }
    });

    view! {
        <div class="complaint-card">
            <div class="card-header">
                <span class="card-id">{complaint.id.to_string()}</span>
                <StatusBadge status=complaint.status />
            </div>
            <div>
                <h3 class="card-title">{complaint.subject}</h3>
                <span class="card-category">{meta}</span>
            </div>
            <p class="card-desc">{complaint.description}</p>
            <div class="card-footer">
                <span>{complaint.date.to_string()}</span>
                <div class="card-actions">
                    <button class="toggle-btn" on:click=on_toggle>{toggle_label}</button>
                    <DeleteConfirmButton button_class="delete-btn" on_answer=on_answer />
                </div>
            </div>
        </div>
    }
}
