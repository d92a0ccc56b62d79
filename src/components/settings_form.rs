//! Settings Form Component
//!
//! Edits the display name. A blank name is rejected with a visible error.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::commands;
use crate::notice::{Notice, NoticeSlot};
use crate::store::{use_app_store, AppStateStoreFields};

/// How long the success notice stays up
const NOTICE_MS: u32 = 3_000;

#[component]
pub fn SettingsForm() -> impl IntoView {
    let store = use_app_store();
    let (name, set_name) = signal(String::new());
    let (notice, set_notice) = signal(NoticeSlot::default());
    // Dropping a Timeout cancels it
    let expiry = StoredValue::new_local(None::<Timeout>);

    // Prefill with the saved name whenever it changes
    Effect::new(move |_| set_name.set(store.username().get()));

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        expiry.set_value(None);
        match commands::set_username(&name.get()) {
            Ok(saved) => {
                *store.username().write() = saved;
                let success = Notice::Success("Username updated successfully!".to_string());
                let generation = set_notice
                    .try_update(|slot| slot.post(success))
                    .unwrap_or_default();
                let timer = Timeout::new(NOTICE_MS, move || {
                    set_notice.try_update(|slot| slot.expire(generation));
                });
                expiry.set_value(Some(timer));
            }
            Err(e) => set_notice.update(|slot| {
                slot.post(Notice::Error(e));
            }),
        }
    };

    view! {
        <form class="settings-form" on:submit=save>
            <div class="form-group">
                <label for="username">"Display Name"</label>
                <input
                    id="username"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>

            {move || notice.with(|slot| slot.current().cloned()).map(|notice| match notice {
                Notice::Success(msg) => view! { <p class="form-success">{msg}</p> }.into_any(),
                Notice::Error(e) => view! { <p class="form-error">{e}</p> }.into_any(),
            })}

            <button type="submit" class="btn-primary">"Save Changes"</button>
        </form>
    }
}
