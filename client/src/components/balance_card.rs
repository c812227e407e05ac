//! Hero card with the USD balance and its KES equivalent.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::util::money::{self, WALLET_CURRENCY};

#[component]
pub fn BalanceCard(balance: Signal<Decimal>) -> impl IntoView {
    let usd = move || money::format_usd(balance.get());
    let kes = move || money::format_kes(money::kes_equivalent(balance.get()));

    view! {
        <section class="balance-card" aria-label="Wallet balance">
            <div class="balance-card__label">
                <span aria-hidden="true">"👛"</span>
                <span>"Available Balance"</span>
            </div>
            <div class="balance-card__amount">
                <span class="balance-card__currency">{WALLET_CURRENCY}</span>
                <span class="balance-card__value">{usd}</span>
            </div>
            <div class="balance-card__footer">
                <span>"≈ KES " {kes}</span>
                <span class="balance-card__badge">"1.5% fee"</span>
            </div>
        </section>
    }
}
