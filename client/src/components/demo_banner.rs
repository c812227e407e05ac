//! Floating demo controls for topping up the wallet with test money.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::state::wallet::DEMO_FUND_PRESETS;

#[component]
pub fn DemoBanner(
    expanded: Signal<bool>,
    on_toggle: Callback<bool>,
    on_add_funds: Callback<Decimal>,
) -> impl IntoView {
    move || {
        if !expanded.get() {
            return view! {
                <button
                    class="demo-banner__fab"
                    aria-label="Open demo controls"
                    on:click=move |_| on_toggle.run(true)
                >
                    "⚗"
                </button>
            }
            .into_any();
        }

        view! {
            <div class="demo-banner">
                <div class="demo-banner__header">
                    <div class="demo-banner__title">
                        <span aria-hidden="true">"⚗"</span>
                        <span>"Demo Mode"</span>
                    </div>
                    <button
                        class="demo-banner__minimize"
                        aria-label="Minimize demo controls"
                        on:click=move |_| on_toggle.run(false)
                    >
                        "✕"
                    </button>
                </div>
                <p class="demo-banner__hint">"Add test funds to try all features"</p>
                <div class="demo-banner__actions">
                    {DEMO_FUND_PRESETS
                        .into_iter()
                        .map(|preset| {
                            view! {
                                <button
                                    class="btn btn--outline btn--small"
                                    on:click=move |_| on_add_funds.run(Decimal::from(preset))
                                >
                                    {format!("+ ${preset}")}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        }
        .into_any()
    }
}
