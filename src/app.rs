//! Complaint Desk App
//!
//! Sidebar navigation plus four views. Every view is derived from the
//! store, which is reloaded from storage whenever the trigger moves.

use leptos::prelude::*;
use reactive_stores::Store;

use complaint_core::views;

use crate::commands;
use crate::components::{ComplaintForm, Dashboard, HistoryGrid, NavSidebar, SettingsForm};
use crate::context::{AppContext, Tab};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (active_tab, set_active_tab) = signal(Tab::Dashboard);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (active_tab, set_active_tab),
    ));

    // Load complaints and username on mount and after every mutation
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        match commands::list_complaints() {
            Ok(loaded) => {
                log::debug!("Loaded {} complaints, trigger={}", loaded.len(), trigger);
                *store.complaints().write() = loaded;
                *store.load_error().write() = None;
            }
            Err(e) => {
                log::error!("Failed to load complaints: {}", e);
                *store.load_error().write() = Some(e);
            }
        }
        match commands::get_username() {
            Ok(name) => *store.username().write() = name,
            Err(e) => log::error!("Failed to load username: {}", e),
        }
    });

    let today = views::long_date(chrono::Local::now().date_naive());
    let view_class = move |tab: Tab| {
        if active_tab.get() == tab { "view active-view" } else { "view" }
    };

    view! {
        <div class="app-layout">
            <NavSidebar />

            <main class="main-content">
                <header class="top-bar">
                    <div>
                        <h1>{move || active_tab.get().title()}</h1>
                        <p class="current-date">{today}</p>
                    </div>
                    <div class="user-profile">
                        "Welcome, "
                        <strong>{move || store.username().get()}</strong>
                    </div>
                </header>

                {move || store.load_error().get().map(|e| view! {
                    <p class="error-banner">{e}</p>
                })}

                <section class=move || view_class(Tab::Dashboard)>
                    <Dashboard />
                </section>
                <section class=move || view_class(Tab::NewComplaint)>
                    <ComplaintForm />
                </section>
                <section class=move || view_class(Tab::History)>
                    <HistoryGrid />
                </section>
                <section class=move || view_class(Tab::Settings)>
                    <SettingsForm />
                </section>
            </main>
        </div>
    }
}
