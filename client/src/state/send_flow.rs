//! Step sequencer behind the send drawer.
//!
//! Navigation is forward-only: amount → recipient → method → confirm →
//! processing → success. Each forward move is guarded; an invalid step
//! simply keeps its continue button disabled.

#[cfg(test)]
#[path = "send_flow_test.rs"]
mod send_flow_test;

use rust_decimal::Decimal;

use crate::state::wallet::WalletState;
use crate::util::money::{self, parse_amount};
use crate::util::recipient::{self, RecipientKind};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendStep {
    #[default]
    Amount,
    Recipient,
    Method,
    Confirm,
    Processing,
    Success,
}

/// How the recipient is paid out in Kenya.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayoutMethod {
    Mpesa,
    Bank,
}

impl PayoutMethod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Mpesa => "M-Pesa",
            Self::Bank => "Bank Transfer",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Self::Mpesa => "M-Pesa",
            Self::Bank => "Bank",
        }
    }

    pub fn delivery(self) -> &'static str {
        match self {
            Self::Mpesa => "Instant delivery",
            Self::Bank => "1-2 business days",
        }
    }
}

/// A send the drawer hands to the ledger once processing ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outgoing {
    pub amount: Decimal,
    pub recipient: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SendFlow {
    pub step: SendStep,
    /// Raw text of the amount field.
    pub amount_input: String,
    pub recipient: String,
    pub recipient_kind: RecipientKind,
    pub method: Option<PayoutMethod>,
}

impl SendFlow {
    pub fn amount(&self) -> Option<Decimal> {
        parse_amount(&self.amount_input)
    }

    /// Amount for quote rows; unparsable input quotes as zero.
    pub fn quoted_amount(&self) -> Decimal {
        self.amount().unwrap_or_default()
    }

    /// The quote panel is only shown for a positive amount.
    pub fn shows_quote(&self) -> bool {
        self.quoted_amount() > Decimal::ZERO
    }

    pub fn kes_received(&self) -> Decimal {
        money::kes_equivalent(self.quoted_amount())
    }

    pub fn fee(&self) -> Decimal {
        money::fee(self.quoted_amount())
    }

    pub fn total(&self) -> Decimal {
        money::total_with_fee(self.quoted_amount())
    }

    pub fn recipient_is_valid(&self) -> bool {
        recipient::is_valid(self.recipient_kind, &self.recipient)
    }

    /// Switching between phone and email clears the typed address.
    pub fn set_recipient_kind(&mut self, kind: RecipientKind) {
        self.recipient_kind = kind;
        self.recipient.clear();
    }

    /// Whether the current step's continue button is enabled.
    pub fn can_continue(&self, wallet: &WalletState) -> bool {
        match self.step {
            SendStep::Amount => self.amount().is_some_and(|amount| wallet.covers(amount)),
            SendStep::Recipient => self.recipient_is_valid(),
            SendStep::Method => self.method.is_some(),
            SendStep::Confirm => true,
            SendStep::Processing | SendStep::Success => false,
        }
    }

    /// Move forward one step if the current step validates. Returns whether
    /// the step changed; landing on `Processing` means the caller starts the
    /// settlement timer.
    pub fn advance(&mut self, wallet: &WalletState) -> bool {
        if !self.can_continue(wallet) {
            return false;
        }
        self.step = match self.step {
            SendStep::Amount => SendStep::Recipient,
            SendStep::Recipient => SendStep::Method,
            SendStep::Method => SendStep::Confirm,
            SendStep::Confirm => SendStep::Processing,
            step @ (SendStep::Processing | SendStep::Success) => step,
        };
        true
    }

    /// End processing. Yields the send exactly once; later calls and calls
    /// after a reset return `None`.
    pub fn finish(&mut self) -> Option<Outgoing> {
        if self.step != SendStep::Processing {
            return None;
        }
        let amount = self.amount()?;
        self.step = SendStep::Success;
        Some(Outgoing { amount, recipient: self.recipient.clone() })
    }

    /// Success line: who receives how much, and how.
    pub fn delivery_summary(&self) -> String {
        let method = self.method.map_or("Bank Transfer", PayoutMethod::label);
        format!(
            "{} will receive KES {} via {method}",
            self.recipient,
            money::format_kes(self.kes_received())
        )
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
