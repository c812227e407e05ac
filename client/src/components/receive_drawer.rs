//! Receive-money drawer: payment code and shareable contact details.
//!
//! The page has no QR renderer, so the QR tab shows the encoded payment
//! payload as a code block next to the wallet id.

use leptos::prelude::*;

use crate::components::drawer::DrawerSheet;
use crate::state::receive::{CopyTarget, ReceiveState, ReceiveTab, SHARE_TITLE};
use crate::util::browser;
use crate::util::timer::{self, COPIED_RESET_DELAY};

#[component]
pub fn ReceiveDrawer(on_close: Callback<()>) -> impl IntoView {
    let receive = RwSignal::new(ReceiveState::unassigned());
    Effect::new(move || receive.update(ReceiveState::ensure_wallet_id));
    let tab = Memo::new(move |_| receive.with(|r| r.tab));

    let close = Callback::new(move |()| {
        receive.update(ReceiveState::reset);
        on_close.run(());
    });

    let copy = move |target: CopyTarget| {
        let value = receive.with_untracked(|r| r.value_of(target).to_owned());
        if browser::copy_text(&value) {
            receive.update(|r| r.mark_copied(target));
            timer::after(COPIED_RESET_DELAY, move || {
                let _ = receive.try_update(|r| r.expire_copied(target));
            });
        }
    };

    let share = move |_: leptos::ev::MouseEvent| {
        receive.with_untracked(|r| browser::share(SHARE_TITLE, &r.share_text(), &r.share_url()));
    };

    let copy_button = move |target: CopyTarget, label: &'static str| {
        view! {
            <button class="copy-button" aria-label=format!("Copy {label}") on:click=move |_| copy(target)>
                {move || if receive.with(|r| r.is_copied(target)) { "✓" } else { "⧉" }}
            </button>
        }
    };

    let detail_row = move |target: CopyTarget, icon: &'static str, label: &'static str| {
        view! {
            <div class="detail-row">
                <div class="detail-row__icon" aria-hidden="true">{icon}</div>
                <div class="detail-row__text">
                    <p class="detail-row__label">{label}</p>
                    <p class="detail-row__value">{move || receive.with(|r| r.value_of(target).to_owned())}</p>
                </div>
                {copy_button(target, label)}
            </div>
        }
    };

    let tab_button = move |target: ReceiveTab, icon: &'static str, label: &'static str| {
        view! {
            <button
                class="toggle__option"
                class:toggle__option--active=move || tab.get() == target
                on:click=move |_| receive.update(|r| r.tab = target)
            >
                <span aria-hidden="true">{icon}</span>
                {label}
            </button>
        }
    };

    let qr_tab = move || {
        view! {
            <div class="drawer-step">
                <pre class="payment-code">{move || receive.with(ReceiveState::qr_payload)}</pre>
                <p class="drawer-step__lead drawer-step__lead--center">"Scan this QR code to send money instantly"</p>
                <div class="detail-row">
                    <div class="detail-row__text">
                        <p class="detail-row__label">"Wallet ID"</p>
                        <p class="detail-row__value detail-row__value--mono">
                            {move || receive.with(|r| r.wallet_id.clone())}
                        </p>
                    </div>
                    {copy_button(CopyTarget::Wallet, "Wallet ID")}
                </div>
                <button class="btn btn--hero btn--block" on:click=share>
                    "Share Payment Link"
                </button>
            </div>
        }
        .into_any()
    };

    let details_tab = move || {
        view! {
            <div class="drawer-step">
                <p class="drawer-step__lead">"Share these details to receive money from anyone"</p>
                {detail_row(CopyTarget::Phone, "📱", "Phone Number")}
                {detail_row(CopyTarget::Email, "✉", "Email Address")}
                {detail_row(CopyTarget::Wallet, "#", "Wallet ID")}
                <button class="btn btn--hero btn--block" on:click=share>
                    "Share All Details"
                </button>
            </div>
        }
        .into_any()
    };

    view! {
        <DrawerSheet title="Receive Money" on_close=close>
            <div class="toggle">
                {tab_button(ReceiveTab::Qr, "▦", "QR Code")}
                {tab_button(ReceiveTab::Details, "⇪", "Share Details")}
            </div>
            {move || match tab.get() {
                ReceiveTab::Qr => qr_tab(),
                ReceiveTab::Details => details_tab(),
            }}
        </DrawerSheet>
    }
}
