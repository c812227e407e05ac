//! Bottom tab bar for the dashboard.

use leptos::prelude::*;

use crate::state::ui::DashboardTab;

#[component]
pub fn NavBar(active: Signal<DashboardTab>, on_select: Callback<DashboardTab>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-bar__tabs">
                {DashboardTab::ALL
                    .into_iter()
                    .map(|tab| {
                        let is_active = move || active.get() == tab;
                        view! {
                            <button
                                class="nav-bar__tab"
                                class:nav-bar__tab--active=is_active
                                aria-label=tab.label()
                                aria-current=move || is_active().then_some("page")
                                on:click=move |_| on_select.run(tab)
                            >
                                <span class="nav-bar__icon" aria-hidden="true">{tab.icon()}</span>
                                <span class="nav-bar__label">{tab.label()}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </nav>
    }
}
