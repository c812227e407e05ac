//! Add-money drawer: amount with presets, then a simulated funding source.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::components::drawer::DrawerSheet;
use crate::components::success_checkmark::SuccessCheckmark;
use crate::state::deposit_flow::{DEPOSIT_PRESETS, DepositFlow, DepositStep, FundingSource};
use crate::util::money;
use crate::util::timer::{self, PROCESSING_DELAY};

#[component]
pub fn DepositDrawer(on_close: Callback<()>, on_deposit: Callback<Decimal>) -> impl IntoView {
    let flow = RwSignal::new(DepositFlow::default());
    let step = Memo::new(move |_| flow.with(|f| f.step));

    let close = Callback::new(move |()| {
        flow.update(DepositFlow::reset);
        on_close.run(());
    });

    let on_source = move |source: FundingSource| {
        if flow.try_update(|f| f.choose_source(source)).unwrap_or(false) {
            timer::after(PROCESSING_DELAY, move || {
                if let Some(amount) = flow.try_update(DepositFlow::finish).flatten() {
                    on_deposit.run(amount);
                }
            });
        }
    };

    let typed_amount = move || flow.with(|f| f.amount().map(money::format_plain).unwrap_or_default());

    let amount_step = move || {
        view! {
            <div class="drawer-step">
                <label class="field__label" for="deposit-amount">"Amount (USD)"</label>
                <input
                    id="deposit-amount"
                    class="field__input field__input--large"
                    type="number"
                    inputmode="decimal"
                    placeholder="0.00"
                    prop:value=move || flow.with(|f| f.amount_input.clone())
                    on:input=move |ev| flow.update(|f| f.amount_input = event_target_value(&ev))
                />
                <div class="chips">
                    {DEPOSIT_PRESETS
                        .into_iter()
                        .map(|preset| {
                            view! {
                                <button class="chip" on:click=move |_| flow.update(|f| f.choose_preset(preset))>
                                    {format!("${preset}")}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <button
                    class="btn btn--hero btn--block"
                    disabled=move || !flow.with(DepositFlow::can_continue)
                    on:click=move |_| {
                        flow.update(|f| {
                            f.advance();
                        });
                    }
                >
                    "Continue to Payment"
                </button>
            </div>
        }
        .into_any()
    };

    let payment_step = move || {
        view! {
            <div class="drawer-step">
                <p class="drawer-step__lead">"Choose payment method for $" {typed_amount}</p>
                {FundingSource::ALL
                    .into_iter()
                    .map(|source| {
                        view! {
                            <button class="source-option" on:click=move |_| on_source(source)>
                                <div class="source-option__badge" aria-hidden="true">{source.badge()}</div>
                                <span class="source-option__label">{source.label()}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    let processing_step = || {
        view! {
            <div class="drawer-status">
                <div class="spinner" aria-hidden="true"></div>
                <p class="drawer-status__title">"Processing payment..."</p>
                <p class="drawer-status__detail">"Please wait"</p>
            </div>
        }
        .into_any()
    };

    let success_step = move || {
        view! {
            <div class="drawer-status">
                <SuccessCheckmark/>
                <h3 class="drawer-status__heading">"Deposit Successful!"</h3>
                <p class="drawer-status__detail">"$" {typed_amount} " USD has been added to your wallet"</p>
                <button class="btn btn--hero" on:click=move |_| close.run(())>
                    "Done"
                </button>
            </div>
        }
        .into_any()
    };

    view! {
        <DrawerSheet title="Add Money" on_close=close>
            {move || match step.get() {
                DepositStep::Amount => amount_step(),
                DepositStep::Payment => payment_step(),
                DepositStep::Processing => processing_step(),
                DepositStep::Success => success_step(),
            }}
        </DrawerSheet>
    }
}
