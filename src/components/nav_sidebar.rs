//! Navigation Sidebar Component

use leptos::prelude::*;

use crate::context::{AppContext, Tab};

#[component]
pub fn NavSidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <aside class="sidebar">
            <div class="logo">"CMS"</div>
            <nav>
                <ul>
                    {Tab::ALL.iter().map(|&tab| {
                        let is_active = move || ctx.active_tab.get() == tab;
                        view! {
                            <li
                                class=move || if is_active() { "active" } else { "" }
                                on:click=move |_| ctx.show(tab)
                            >
                                {tab.label()}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
        </aside>
    }
}
