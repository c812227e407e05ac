//! Step sequencer behind the deposit drawer: amount → payment → processing → success.

#[cfg(test)]
#[path = "deposit_flow_test.rs"]
mod deposit_flow_test;

use rust_decimal::Decimal;

use crate::util::money::parse_amount;

/// Quick-pick amounts offered under the amount field.
pub const DEPOSIT_PRESETS: [u32; 3] = [50, 100, 200];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DepositStep {
    #[default]
    Amount,
    Payment,
    Processing,
    Success,
}

/// Simulated wallet funding rails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FundingSource {
    GooglePay,
    ApplePay,
    Card,
}

impl FundingSource {
    pub const ALL: [Self; 3] = [Self::GooglePay, Self::ApplePay, Self::Card];

    pub fn label(self) -> &'static str {
        match self {
            Self::GooglePay => "Google Pay",
            Self::ApplePay => "Apple Pay",
            Self::Card => "Debit/Credit Card",
        }
    }

    /// Glyph shown in the source's icon tile.
    pub fn badge(self) -> &'static str {
        match self {
            Self::GooglePay => "G",
            Self::ApplePay => "\u{f8ff}",
            Self::Card => "💳",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DepositFlow {
    pub step: DepositStep,
    pub amount_input: String,
    pub source: Option<FundingSource>,
}

impl DepositFlow {
    pub fn amount(&self) -> Option<Decimal> {
        parse_amount(&self.amount_input)
    }

    /// Any positive amount up to `money::MAX_AMOUNT` continues.
    pub fn can_continue(&self) -> bool {
        self.step == DepositStep::Amount && self.amount().is_some_and(|amount| amount > Decimal::ZERO)
    }

    pub fn choose_preset(&mut self, preset: u32) {
        self.amount_input = preset.to_string();
    }

    /// Amount → payment.
    pub fn advance(&mut self) -> bool {
        if !self.can_continue() {
            return false;
        }
        self.step = DepositStep::Payment;
        true
    }

    /// Picking a source starts processing right away. Returns whether the
    /// caller should start the settlement timer.
    pub fn choose_source(&mut self, source: FundingSource) -> bool {
        if self.step != DepositStep::Payment {
            return false;
        }
        self.source = Some(source);
        self.step = DepositStep::Processing;
        true
    }

    /// End processing, yielding the credited amount exactly once.
    pub fn finish(&mut self) -> Option<Decimal> {
        if self.step != DepositStep::Processing {
            return None;
        }
        let amount = self.amount()?;
        self.step = DepositStep::Success;
        Some(amount)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
