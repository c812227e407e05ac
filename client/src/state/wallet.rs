//! Wallet ledger: balance plus newest-first transaction history.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard owns one `WalletState` signal. Drawers and the chat
//! assistant call `send`/`deposit` from their completion callbacks; this
//! layer trusts them and never re-validates amounts.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::util::money::{self, WALLET_CURRENCY};

/// Balance a fresh session starts with.
pub const STARTING_BALANCE: Decimal = dec!(250.00);

/// Display timestamp for rows created during this session.
pub const JUST_NOW: &str = "Just now";

/// Counterparty label for deposits made through the deposit drawer.
pub const CARD_DEPOSIT: &str = "Card Deposit";

/// Counterparty label for demo-banner injections.
pub const DEMO_FUNDS: &str = "Demo Funds";

/// Amounts offered by the demo banner's add-funds buttons.
pub const DEMO_FUND_PRESETS: [u32; 3] = [100, 500, 1000];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Sent,
    Received,
    Deposit,
}

impl TxKind {
    /// Sign shown in front of the amount.
    pub fn sign(self) -> &'static str {
        match self {
            Self::Sent => "-",
            Self::Received | Self::Deposit => "+",
        }
    }

    /// CSS modifier carrying the icon/amount color.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Sent => "destructive",
            Self::Received => "success",
            Self::Deposit => "primary",
        }
    }

    /// Arrow glyph for the row icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Sent => "↗",
            Self::Received | Self::Deposit => "↙",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Completed,
    Pending,
    Failed,
}

/// One immutable ledger row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal,
    pub currency: String,
    /// Recipient for sends, funding source for deposits.
    pub recipient: String,
    pub timestamp: String,
    pub status: TxStatus,
}

impl Transaction {
    fn completed(kind: TxKind, amount: Decimal, recipient: &str, timestamp: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            amount,
            currency: WALLET_CURRENCY.to_owned(),
            recipient: recipient.to_owned(),
            timestamp: timestamp.to_owned(),
            status: TxStatus::Completed,
        }
    }

    /// Whether this row was created during the current session.
    pub fn is_fresh(&self) -> bool {
        self.timestamp == JUST_NOW
    }
}

/// Balance and history for the demo account.
#[derive(Clone, Debug, PartialEq)]
pub struct WalletState {
    pub balance: Decimal,
    /// Newest first.
    pub transactions: Vec<Transaction>,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            balance: STARTING_BALANCE,
            transactions: vec![
                Transaction::completed(TxKind::Sent, dec!(50), "+254712345678", "Today, 2:30 PM"),
                Transaction::completed(TxKind::Deposit, dec!(200), "Google Pay", "Yesterday, 10:15 AM"),
                Transaction::completed(TxKind::Sent, dec!(100), "+254700123456", "Jan 10, 4:45 PM"),
            ],
        }
    }
}

impl WalletState {
    /// Ledger with the given balance and no history.
    pub fn empty(balance: Decimal) -> Self {
        Self { balance, transactions: Vec::new() }
    }

    /// Whether `amount` may be sent. Shared by the send drawer's disabled
    /// button and the assistant's insufficient-funds reply.
    pub fn covers(&self, amount: Decimal) -> bool {
        amount > Decimal::ZERO && amount <= self.balance
    }

    /// Debit `amount` plus fee and record a sent row.
    pub fn send(&mut self, amount: Decimal, recipient: &str) -> &Transaction {
        self.balance = self.balance.saturating_sub(money::total_with_fee(amount));
        self.prepend(Transaction::completed(TxKind::Sent, amount, recipient, JUST_NOW))
    }

    /// Credit a card deposit.
    pub fn deposit(&mut self, amount: Decimal) -> &Transaction {
        self.credit(amount, CARD_DEPOSIT)
    }

    /// Credit test money from the demo banner.
    pub fn add_demo_funds(&mut self, amount: Decimal) -> &Transaction {
        self.credit(amount, DEMO_FUNDS)
    }

    /// The `limit` newest rows.
    pub fn recent(&self, limit: usize) -> &[Transaction] {
        &self.transactions[..limit.min(self.transactions.len())]
    }

    fn credit(&mut self, amount: Decimal, source: &str) -> &Transaction {
        self.balance = self.balance.saturating_add(amount);
        self.prepend(Transaction::completed(TxKind::Deposit, amount, source, JUST_NOW))
    }

    fn prepend(&mut self, tx: Transaction) -> &Transaction {
        self.transactions.insert(0, tx);
        &self.transactions[0]
    }
}
