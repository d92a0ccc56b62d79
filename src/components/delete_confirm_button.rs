//! Delete Confirm Button Component
//!
//! Two-step inline delete. The user's answer is handed to `on_answer`,
//! which passes it on as the repository's confirmation.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a "Delete" button; clicking it asks "Delete?" with ✓/✗.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_answer` - Called with `true` for ✓ and `false` for ✗
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_answer: Callback<bool>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    let answer = move |ev: web_sys::MouseEvent, confirmed: bool| {
        ev.stop_propagation();
        set_asking.set(false);
        on_answer.run(confirmed);
    };

    move || {
        if asking.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete? This cannot be undone."</span>
                    <button class="confirm-btn" on:click=move |ev| answer(ev, true)>"✓"</button>
                    <button class="cancel-btn" on:click=move |ev| answer(ev, false)>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    "Delete"
                </button>
            }
            .into_any()
        }
    }
}
