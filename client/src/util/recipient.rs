//! Recipient address validation for the send flow.

#[cfg(test)]
#[path = "recipient_test.rs"]
mod recipient_test;

use std::sync::LazyLock;

use regex::Regex;

/// Minimum digit count for a phone number to be accepted.
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex pattern is valid"));

/// How a send recipient is addressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecipientKind {
    #[default]
    Phone,
    Email,
}

impl RecipientKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Phone => "Phone Number",
            Self::Email => "Email Address",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Phone => "+254 7XX XXX XXX",
            Self::Email => "recipient@email.com",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::Phone => "Enter the recipient's phone number",
            Self::Email => "Enter the recipient's email address",
        }
    }

    /// HTML input `type` attribute for this kind.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Phone => "tel",
            Self::Email => "email",
        }
    }
}

/// A phone number is valid once it carries at least ten digits; separators are ignored.
pub fn is_valid_phone(raw: &str) -> bool {
    raw.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw)
}

/// Validate `raw` against the rules for `kind`.
pub fn is_valid(kind: RecipientKind, raw: &str) -> bool {
    match kind {
        RecipientKind::Phone => is_valid_phone(raw),
        RecipientKind::Email => is_valid_email(raw),
    }
}
