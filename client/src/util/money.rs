//! Exchange-rate constants and USD/KES money formatting.
//!
//! DESIGN
//! ======
//! Amounts are `Decimal` end to end so fee math stays exact
//! (`50 × 1.015 = 50.75`, never `50.749999…`). Rounding happens only at the
//! display edge, half away from zero.
//!
//! User input is capped at `MAX_AMOUNT` and every operation saturates, so no
//! figure the UI can reach overflows `Decimal` and panics the app.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Kenyan shillings paid out per US dollar.
pub const KES_PER_USD: Decimal = dec!(152.5);

/// Transfer fee charged on top of the sent amount.
pub const FEE_RATE: Decimal = dec!(0.015);

/// Largest amount accepted from an input field.
pub const MAX_AMOUNT: Decimal = dec!(1000000000);

/// Currency code of every wallet balance and ledger row.
pub const WALLET_CURRENCY: &str = "USD";

/// Fee owed for sending `amount`.
pub fn fee(amount: Decimal) -> Decimal {
    amount.saturating_mul(FEE_RATE)
}

/// Total debited from the wallet for sending `amount`.
pub fn total_with_fee(amount: Decimal) -> Decimal {
    amount.saturating_add(fee(amount))
}

/// Shillings the recipient receives for `amount` dollars.
pub fn kes_equivalent(amount: Decimal) -> Decimal {
    amount.saturating_mul(KES_PER_USD)
}

/// Parse a user-entered amount. Blank, malformed or out-of-range text
/// (magnitude above `MAX_AMOUNT`) yields `None`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok().filter(|amount| amount.abs() <= MAX_AMOUNT)
}

/// Format dollars with two decimals and thousands separators: `1,234.50`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let magnitude = rounded.abs();
    let whole = magnitude.trunc();
    // Scaling only the fractional part keeps this safe up to `Decimal::MAX`.
    let cents = ((magnitude - whole) * dec!(100)).to_u32().unwrap_or_default();
    format!("{sign}{}.{cents:02}", group_thousands(whole.to_u128().unwrap_or_default()))
}

/// Format shillings rounded to whole units with thousands separators: `38,125`.
pub fn format_kes(amount: Decimal) -> String {
    let whole = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i128()
        .unwrap_or_default();
    let sign = if whole < 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(whole.unsigned_abs()))
}

/// Render an amount the way a user typed it: no trailing zeros, no grouping.
pub fn format_plain(amount: Decimal) -> String {
    amount.normalize().to_string()
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
