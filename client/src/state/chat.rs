//! Scripted assistant conversation: intent rules and transfer state machine.
//!
//! DESIGN
//! ======
//! `ChatState::submit` applies a user turn synchronously: it records the
//! message, moves the conversation state and returns a `Followup` telling the
//! panel which timer to start. Timers call back into `deliver` or
//! `complete_processing`, so every transition stays a plain function of
//! (state, input) and is testable without a browser.
//!
//! ```text
//! Idle --send intent--> AwaitingMethod --mpesa|1--> AwaitingOtp --6 digits--> Processing
//!  ^                                                                             |
//!  +------------------------------ complete_processing --------------------------+
//! ```

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::state::wallet::WalletState;
use crate::util::clock;
use crate::util::money::{self, format_kes, format_plain, format_usd};

/// Amount assumed when a send request names no figure.
pub const DEFAULT_SEND_AMOUNT: Decimal = dec!(100);

/// Recipient assumed when a send request names no phone number.
pub const DEFAULT_RECIPIENT: &str = "+254712345678";

const GREETING: &str = "👋 Welcome to SwiftKes!

I can help you send money to Kenya instantly. Just tell me what you'd like to do:

• \"Send 100 USD to +254712345678\"
• \"Check my balance\"
• \"Show exchange rate\"";

const VERIFICATION: &str = "For your security, I've sent a 6-digit OTP to your phone. \
Please enter it to confirm this transaction.";

const RATE_CARD: &str = "📊 Current Exchange Rate:

1 USD = 152.50 KES
Last updated: just now

SwiftKes fee: 1.5% (lowest in market!)";

const BANK_HINT: &str = "Bank transfers take 1-2 business days. For instant delivery, choose M-Pesa!

Reply '1' for M-Pesa or '2' to continue with Bank.";

const GREETING_ID: &str = "greeting";

const METHOD_HINT: &str = "Please choose a delivery method: reply '1' for M-Pesa or '2' for Bank Transfer.";

const OTP_HINT: &str = "Please enter the 6-digit code I sent to your phone. (Hint: try 123456 for demo)";

const HELP: &str = "I can help you:

• Send money (e.g., 'Send 50 USD to +254700123456')
• Check your balance
• View exchange rates

What would you like to do?";

const METHOD_MENU: &str = "1️⃣ M-Pesa (Instant)\n2️⃣ Bank Transfer (1-2 days)";

static OTP_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("otp regex pattern is valid"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[0-9]{10,12}").expect("phone regex pattern is valid"));

static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]{1,2})?").expect("amount regex pattern is valid"));

static GREETING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:hi|hello|hey|start)\b").expect("greeting regex pattern is valid"));

/// Where the conversation is in the transfer script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingMethod,
    AwaitingOtp,
    Processing,
}

/// A transfer captured from chat, waiting for method and OTP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub amount: Decimal,
    pub recipient: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

/// A single chat bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub author: Author,
    pub timestamp: String,
}

impl ChatMessage {
    fn new(author: Author, text: String) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), text, author, timestamp: clock::time_of_day() }
    }
}

/// What a free-text message asks for when no transfer is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Send(Draft),
    Balance,
    Rate,
    Greeting,
    Help,
}

/// Work the panel must schedule after a user turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Followup {
    /// Input was ignored.
    None,
    /// Show `text` as a bot message after the typing delay.
    Reply(String),
    /// Run the processing delay, then call `complete_processing`.
    Settle,
}

/// Conversation history plus transfer state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub state: ConversationState,
    pub pending: Option<Draft>,
    /// A bot reply is scheduled but not yet delivered.
    pub typing: bool,
}

impl Default for ChatState {
    /// The greeting is left unstamped so server and browser render it alike;
    /// `stamp_greeting` fills in the local time once hydrated.
    fn default() -> Self {
        let greeting = ChatMessage {
            id: GREETING_ID.to_owned(),
            text: GREETING.to_owned(),
            author: Author::Bot,
            timestamp: String::new(),
        };
        Self {
            messages: vec![greeting],
            state: ConversationState::Idle,
            pending: None,
            typing: false,
        }
    }
}

impl ChatState {
    /// Give any unstamped message the current local time.
    pub fn stamp_greeting(&mut self) {
        for message in self.messages.iter_mut().filter(|m| m.timestamp.is_empty()) {
            message.timestamp = clock::time_of_day();
        }
    }

    /// The input box is disabled while a confirmed transfer settles.
    pub fn accepts_input(&self) -> bool {
        self.state != ConversationState::Processing
    }

    /// Record a user message and advance the script. `wallet` backs the
    /// insufficient-funds check and the balance reply.
    pub fn submit(&mut self, input: &str, wallet: &WalletState) -> Followup {
        let trimmed = input.trim();
        if trimmed.is_empty() || !self.accepts_input() {
            return Followup::None;
        }
        self.messages.push(ChatMessage::new(Author::User, input.to_owned()));

        let followup = self.respond(&trimmed.to_lowercase(), wallet);
        if followup != Followup::None {
            self.typing = true;
        }
        followup
    }

    /// Append a scheduled bot reply.
    pub fn deliver(&mut self, text: String) {
        self.messages.push(ChatMessage::new(Author::Bot, text));
        self.typing = false;
    }

    /// Finish a settling transfer: post the confirmation, return to idle and
    /// hand the draft to the ledger. `reference` is the id shown to the user.
    pub fn complete_processing(&mut self, reference: &str) -> Option<Draft> {
        if self.state != ConversationState::Processing {
            return None;
        }
        self.state = ConversationState::Idle;
        self.typing = false;
        let draft = self.pending.take()?;
        self.messages.push(ChatMessage::new(Author::Bot, confirmation(&draft, reference)));
        Some(draft)
    }

    fn respond(&mut self, lower: &str, wallet: &WalletState) -> Followup {
        match self.state {
            ConversationState::Processing => Followup::None,
            ConversationState::AwaitingMethod => {
                if lower.contains("mpesa") || lower.contains("m-pesa") || lower == "1" {
                    self.state = ConversationState::AwaitingOtp;
                    Followup::Reply(VERIFICATION.to_owned())
                } else if lower.contains("bank") || lower == "2" {
                    Followup::Reply(BANK_HINT.to_owned())
                } else {
                    Followup::Reply(METHOD_HINT.to_owned())
                }
            }
            ConversationState::AwaitingOtp => {
                if OTP_PATTERN.is_match(lower) {
                    self.state = ConversationState::Processing;
                    Followup::Settle
                } else {
                    Followup::Reply(OTP_HINT.to_owned())
                }
            }
            ConversationState::Idle => match parse_intent(lower) {
                Intent::Send(draft) if draft.amount <= Decimal::ZERO => Followup::Reply(HELP.to_owned()),
                Intent::Send(draft) if !wallet.covers(draft.amount) => {
                    Followup::Reply(insufficient_funds(draft.amount, wallet.balance))
                }
                Intent::Send(draft) => {
                    let reply = format!("{}\n\n{METHOD_MENU}", send_quote(&draft));
                    self.pending = Some(draft);
                    self.state = ConversationState::AwaitingMethod;
                    Followup::Reply(reply)
                }
                Intent::Balance => Followup::Reply(balance_report(wallet.balance)),
                Intent::Rate => Followup::Reply(RATE_CARD.to_owned()),
                Intent::Greeting => Followup::Reply(GREETING.to_owned()),
                Intent::Help => Followup::Reply(HELP.to_owned()),
            },
        }
    }
}

/// Classify lower-cased free text. Rules are tried in order: send, balance,
/// rate, greeting, help.
pub fn parse_intent(lower: &str) -> Intent {
    if lower.contains("send") && lower.chars().any(|c| c.is_ascii_digit()) {
        return Intent::Send(parse_draft(lower));
    }
    if lower.contains("balance") {
        return Intent::Balance;
    }
    if lower.contains("rate") || lower.contains("exchange") {
        return Intent::Rate;
    }
    if GREETING_PATTERN.is_match(lower) {
        return Intent::Greeting;
    }
    Intent::Help
}

fn parse_draft(lower: &str) -> Draft {
    let phone = PHONE_PATTERN.find(lower);
    let recipient = phone.map_or_else(|| DEFAULT_RECIPIENT.to_owned(), |m| m.as_str().to_owned());

    // Digits inside the phone number must not be read as the amount.
    let remainder = match phone {
        Some(m) => format!("{} {}", &lower[..m.start()], &lower[m.end()..]),
        None => lower.to_owned(),
    };
    // A digit run too long for `Decimal` saturates so the funds check rejects it.
    let amount = AMOUNT_PATTERN
        .find(&remainder)
        .map_or(DEFAULT_SEND_AMOUNT, |m| Decimal::from_str(m.as_str()).unwrap_or(Decimal::MAX));

    Draft { amount, recipient }
}

/// Short user-facing transfer reference: `SW-` and eight uppercase alphanumerics.
pub fn transaction_reference() -> String {
    let raw = uuid::Uuid::new_v4().simple().to_string();
    format!("SW-{}", raw[..8].to_ascii_uppercase())
}

fn send_quote(draft: &Draft) -> String {
    format!(
        "Great! I'll help you send money. Here's a summary:

💰 Amount: {amount} USD
📱 Recipient: {recipient}
💱 Rate: 1 USD = 152.50 KES
📤 They receive: ~{kes} KES
💳 Fee: 1.5% ({fee} USD)

Please select the recipient's preferred method:",
        amount = format_plain(draft.amount),
        recipient = draft.recipient,
        kes = format_kes(money::kes_equivalent(draft.amount)),
        fee = format_usd(money::fee(draft.amount)),
    )
}

fn confirmation(draft: &Draft, reference: &str) -> String {
    format!(
        "✅ Transaction Confirmed!

🎉 {amount} USD sent to {recipient}

Transaction ID: {reference}
They'll receive {kes} KES via M-Pesa within 30 seconds.

Need anything else?",
        amount = format_plain(draft.amount),
        recipient = draft.recipient,
        kes = format_kes(money::kes_equivalent(draft.amount)),
    )
}

fn balance_report(balance: Decimal) -> String {
    format!(
        "💰 Your current balance:

USDC: {usd} USD
≈ KES {kes}

Available for instant withdrawal to M-Pesa.",
        usd = format_usd(balance),
        kes = format_kes(money::kes_equivalent(balance)),
    )
}

fn insufficient_funds(amount: Decimal, balance: Decimal) -> String {
    format!(
        "⚠️ Insufficient balance. You asked to send {amount} USD but only {available} USD is available.

Add money from the Home tab or try a smaller amount.",
        amount = format_plain(amount),
        available = format_usd(balance),
    )
}
