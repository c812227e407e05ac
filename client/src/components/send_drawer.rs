//! Send-money drawer: amount, recipient, payout method, confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Step rules live in `SendFlow`; this component renders the current step
//! and owns the processing timer. The wallet is read from context for the
//! balance guard and only mutated by the parent through `on_send`.
//!
//! TRADE-OFFS
//! ==========
//! The timer outlives the drawer if the user closes it mid-processing. The
//! completion uses `try_update` so a disposed flow signal yields nothing and
//! the ledger is left untouched.

use leptos::prelude::*;

use crate::components::drawer::DrawerSheet;
use crate::components::success_checkmark::SuccessCheckmark;
use crate::state::send_flow::{Outgoing, PayoutMethod, SendFlow, SendStep};
use crate::state::wallet::WalletState;
use crate::util::money;
use crate::util::recipient::RecipientKind;
use crate::util::timer::{self, PROCESSING_DELAY};

#[component]
pub fn SendDrawer(on_close: Callback<()>, on_send: Callback<Outgoing>) -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let flow = RwSignal::new(SendFlow::default());
    // Re-render the step body only when the step changes, not per keystroke.
    let step = Memo::new(move |_| flow.with(|f| f.step));

    let close = Callback::new(move |()| {
        flow.update(SendFlow::reset);
        on_close.run(());
    });

    let on_continue = move |_: leptos::ev::MouseEvent| {
        let moved = wallet.with_untracked(|w| flow.try_update(|f| f.advance(w))).unwrap_or(false);
        if moved && flow.with_untracked(|f| f.step == SendStep::Processing) {
            timer::after(PROCESSING_DELAY, move || {
                if let Some(outgoing) = flow.try_update(SendFlow::finish).flatten() {
                    on_send.run(outgoing);
                }
            });
        }
    };
    let continue_disabled = move || !wallet.with(|w| flow.with(|f| f.can_continue(w)));

    let amount_step = move || {
        view! {
            <div class="drawer-step">
                <label class="field__label" for="send-amount">"Amount (USD)"</label>
                <input
                    id="send-amount"
                    class="field__input field__input--large"
                    type="number"
                    inputmode="decimal"
                    placeholder="0.00"
                    prop:value=move || flow.with(|f| f.amount_input.clone())
                    on:input=move |ev| flow.update(|f| f.amount_input = event_target_value(&ev))
                />
                <p class="field__hint">
                    "Available: $" {move || money::format_usd(wallet.with(|w| w.balance))} " USD"
                </p>
                <Show when=move || flow.with(SendFlow::shows_quote)>
                    <div class="quote">
                        <div class="quote__row">
                            <span>"Recipient gets"</span>
                            <span>"KES " {move || money::format_kes(flow.with(SendFlow::kes_received))}</span>
                        </div>
                        <div class="quote__row">
                            <span>"Fee (1.5%)"</span>
                            <span>"$" {move || money::format_usd(flow.with(SendFlow::fee))}</span>
                        </div>
                    </div>
                </Show>
                <button class="btn btn--accent btn--block" disabled=continue_disabled on:click=on_continue>
                    "Continue →"
                </button>
            </div>
        }
        .into_any()
    };

    let recipient_step = move || {
        let kind = move || flow.with(|f| f.recipient_kind);
        let kind_toggle = move |target: RecipientKind, icon: &'static str, text: &'static str| {
            view! {
                <button
                    class="toggle__option"
                    class:toggle__option--active=move || kind() == target
                    on:click=move |_| flow.update(|f| f.set_recipient_kind(target))
                >
                    <span aria-hidden="true">{icon}</span>
                    {text}
                </button>
            }
        };

        view! {
            <div class="drawer-step">
                <div class="toggle">
                    {kind_toggle(RecipientKind::Phone, "📱", "Phone")}
                    {kind_toggle(RecipientKind::Email, "✉", "Email")}
                </div>
                <label class="field__label" for="send-recipient">{move || kind().label()}</label>
                <input
                    id="send-recipient"
                    class="field__input"
                    type=move || kind().input_type()
                    placeholder=move || kind().placeholder()
                    prop:value=move || flow.with(|f| f.recipient.clone())
                    on:input=move |ev| flow.update(|f| f.recipient = event_target_value(&ev))
                />
                <p class="field__hint">{move || kind().hint()}</p>
                <button class="btn btn--accent btn--block" disabled=continue_disabled on:click=on_continue>
                    "Continue →"
                </button>
            </div>
        }
        .into_any()
    };

    let method_step = move || {
        let method_option = move |method: PayoutMethod, icon: &'static str| {
            view! {
                <button
                    class="method-option"
                    class:method-option--selected=move || flow.with(|f| f.method == Some(method))
                    on:click=move |_| flow.update(|f| f.method = Some(method))
                >
                    <div class="method-option__icon" aria-hidden="true">{icon}</div>
                    <div>
                        <p class="method-option__label">{method.label()}</p>
                        <p class="method-option__detail">{method.delivery()}</p>
                    </div>
                </button>
            }
        };

        view! {
            <div class="drawer-step">
                <p class="drawer-step__lead">"How should they receive the money?"</p>
                {method_option(PayoutMethod::Mpesa, "📲")}
                {method_option(PayoutMethod::Bank, "🏦")}
                <button class="btn btn--accent btn--block" disabled=continue_disabled on:click=on_continue>
                    "Continue →"
                </button>
            </div>
        }
        .into_any()
    };

    let confirm_step = move || {
        let snapshot = flow.get_untracked();
        let via = snapshot.method.map_or("", PayoutMethod::short_label);
        view! {
            <div class="drawer-step">
                <div class="summary">
                    <div class="summary__row">
                        <span>"You send"</span>
                        <span>"$" {money::format_plain(snapshot.quoted_amount())} " USD"</span>
                    </div>
                    <div class="summary__row">
                        <span>"They receive"</span>
                        <span>"KES " {money::format_kes(snapshot.kes_received())}</span>
                    </div>
                    <div class="summary__row">
                        <span>"To"</span>
                        <span>{snapshot.recipient.clone()}</span>
                    </div>
                    <div class="summary__row">
                        <span>"Via"</span>
                        <span>{via}</span>
                    </div>
                    <div class="summary__row summary__row--total">
                        <span>"Total (incl. fee)"</span>
                        <span>"$" {money::format_usd(snapshot.total())}</span>
                    </div>
                </div>
                <button class="btn btn--accent btn--block" on:click=on_continue>
                    "Confirm & Send"
                </button>
            </div>
        }
        .into_any()
    };

    let processing_step = || {
        view! {
            <div class="drawer-status">
                <div class="spinner" aria-hidden="true"></div>
                <p class="drawer-status__title">"Processing transaction..."</p>
                <p class="drawer-status__detail">"This will just take a moment"</p>
            </div>
        }
        .into_any()
    };

    let success_step = move || {
        view! {
            <div class="drawer-status">
                <SuccessCheckmark/>
                <h3 class="drawer-status__heading">"Money Sent!"</h3>
                <p class="drawer-status__detail">{flow.with_untracked(SendFlow::delivery_summary)}</p>
                <button class="btn btn--hero" on:click=move |_| close.run(())>
                    "Done"
                </button>
            </div>
        }
        .into_any()
    };

    view! {
        <DrawerSheet title="Send Money" on_close=close>
            {move || match step.get() {
                SendStep::Amount => amount_step(),
                SendStep::Recipient => recipient_step(),
                SendStep::Method => method_step(),
                SendStep::Confirm => confirm_step(),
                SendStep::Processing => processing_step(),
                SendStep::Success => success_step(),
            }}
        </DrawerSheet>
    }
}
