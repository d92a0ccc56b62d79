//! New Complaint Form Component
//!
//! Submits a complaint, then resets and returns to the dashboard.

use leptos::prelude::*;

use complaint_core::NewComplaint;

use crate::commands;
use crate::context::{AppContext, Tab};

/// Category options
const CATEGORIES: &[&str] = &["Technical", "Billing", "Service", "Facilities", "Other"];

/// Priority options
const PRIORITIES: &[&str] = &["Low", "Medium", "High"];

#[component]
pub fn ComplaintForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (subject, set_subject) = signal(String::new());
    let (category, set_category) = signal(CATEGORIES[0].to_string());
    let (priority, set_priority) = signal(PRIORITIES[1].to_string());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let reset = move || {
        set_subject.set(String::new());
        set_category.set(CATEGORIES[0].to_string());
        set_priority.set(PRIORITIES[1].to_string());
        set_description.set(String::new());
        set_error.set(None);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft =
            NewComplaint::new(subject.get(), category.get(), priority.get(), description.get());
        match commands::create_complaint(draft) {
            Ok(created) => {
                log::info!("Submitted complaint {}", created.id);
                reset();
                ctx.reload();
                ctx.show(Tab::Dashboard);
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <form class="complaint-form" on:submit=submit>
            <div class="form-group">
                <label for="subject">"Subject"</label>
                <input
                    id="subject"
                    type="text"
                    placeholder="Brief summary of the issue"
                    required=true
                    prop:value=move || subject.get()
                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="category">"Category"</label>
                    <select
                        id="category"
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        {CATEGORIES
                            .iter()
                            .map(|c| view! { <option value=*c>{*c}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="priority">"Priority"</label>
                    <select
                        id="priority"
                        prop:value=move || priority.get()
                        on:change=move |ev| set_priority.set(event_target_value(&ev))
                    >
                        {PRIORITIES
                            .iter()
                            .map(|p| view! { <option value=*p>{*p}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="form-group">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    rows="5"
                    placeholder="Describe the problem in detail"
                    required=true
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>

            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <button type="submit" class="btn-primary">"Submit Complaint"</button>
        </form>
    }
}
