//! Ledger row with direction icon, counterparty and signed amount.

#[cfg(test)]
#[path = "transaction_item_test.rs"]
mod transaction_item_test;

use leptos::prelude::*;

use crate::state::wallet::{Transaction, TxStatus};
use crate::util::money;

/// Signed amount with currency, e.g. `-50.00 USD`.
pub fn amount_label(tx: &Transaction) -> String {
    format!("{}{} {}", tx.kind.sign(), money::format_usd(tx.amount), tx.currency)
}

#[component]
pub fn TransactionItem(tx: Transaction, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let tone = tx.kind.tone();
    let amount = amount_label(&tx);
    let fresh = tx.is_fresh();

    view! {
        <div class="tx-item" class:tx-item--fresh=fresh style=format!("animation-delay: {delay_ms}ms;")>
            <div class=format!("tx-item__icon tx-item__icon--{tone}") aria-hidden="true">
                {tx.kind.icon()}
            </div>
            <div class="tx-item__details">
                <p class="tx-item__recipient">{tx.recipient}</p>
                <p class="tx-item__timestamp">{tx.timestamp}</p>
            </div>
            <div class="tx-item__summary">
                <p class=format!("tx-item__amount tx-item__amount--{tone}")>{amount}</p>
                {(tx.status == TxStatus::Completed)
                    .then(|| {
                        view! { <div class="tx-item__status">"✔ Completed"</div> }
                    })}
            </div>
        </div>
    }
}
