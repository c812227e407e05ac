//! Receive drawer state: demo profile contact details, wallet id, QR
//! payload and share text.

#[cfg(test)]
#[path = "receive_test.rs"]
mod receive_test;

use serde::Serialize;

pub const PROFILE_NAME: &str = "John Doe";
pub const PROFILE_INITIALS: &str = "JD";
pub const PROFILE_PHONE: &str = "+1 234 567 8900";
pub const PROFILE_EMAIL: &str = "john.doe@email.com";

const APP_NAME: &str = "SwiftKes";
const PAY_LINK_BASE: &str = "https://swiftkes.app/pay/";
pub const SHARE_TITLE: &str = "Send me money on SwiftKes";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReceiveTab {
    #[default]
    Qr,
    Details,
}

/// Which copy button last succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyTarget {
    Wallet,
    Phone,
    Email,
}

/// JSON carried by the payment QR code. Field order is part of the format.
#[derive(Serialize)]
struct PaymentCode<'a> {
    app: &'a str,
    wallet: &'a str,
    phone: &'a str,
    email: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiveState {
    pub tab: ReceiveTab,
    pub copied: Option<CopyTarget>,
    pub wallet_id: String,
    pub phone: String,
    pub email: String,
}

impl Default for ReceiveState {
    fn default() -> Self {
        Self::new(PROFILE_PHONE, PROFILE_EMAIL)
    }
}

impl ReceiveState {
    pub fn new(phone: &str, email: &str) -> Self {
        Self {
            tab: ReceiveTab::Qr,
            copied: None,
            wallet_id: new_wallet_id(),
            phone: phone.to_owned(),
            email: email.to_owned(),
        }
    }

    /// Contact details with no wallet id yet. Server and browser render the
    /// same markup until `ensure_wallet_id` runs after hydration.
    pub fn unassigned() -> Self {
        Self { wallet_id: String::new(), ..Self::default() }
    }

    /// Assign a fresh wallet id once; later calls keep it.
    pub fn ensure_wallet_id(&mut self) {
        if self.wallet_id.is_empty() {
            self.wallet_id = new_wallet_id();
        }
    }

    pub fn value_of(&self, target: CopyTarget) -> &str {
        match target {
            CopyTarget::Wallet => &self.wallet_id,
            CopyTarget::Phone => &self.phone,
            CopyTarget::Email => &self.email,
        }
    }

    pub fn mark_copied(&mut self, target: CopyTarget) {
        self.copied = Some(target);
    }

    /// Clear the check mark for `target` unless another row was copied since.
    pub fn expire_copied(&mut self, target: CopyTarget) {
        if self.copied == Some(target) {
            self.copied = None;
        }
    }

    pub fn is_copied(&self, target: CopyTarget) -> bool {
        self.copied == Some(target)
    }

    pub fn qr_payload(&self) -> String {
        let code = PaymentCode { app: APP_NAME, wallet: &self.wallet_id, phone: &self.phone, email: &self.email };
        serde_json::to_string(&code).unwrap_or_default()
    }

    pub fn share_text(&self) -> String {
        format!(
            "Send me money via SwiftKes!\n\nPhone: {}\nEmail: {}\nWallet ID: {}",
            self.phone, self.email, self.wallet_id
        )
    }

    pub fn share_url(&self) -> String {
        format!("{PAY_LINK_BASE}{}", self.wallet_id)
    }

    /// Closing the drawer returns to the QR tab; the wallet id is kept.
    pub fn reset(&mut self) {
        self.tab = ReceiveTab::Qr;
        self.copied = None;
    }
}

/// `SWIFT-` followed by six uppercase alphanumerics.
pub fn new_wallet_id() -> String {
    let raw = uuid::Uuid::new_v4().simple().to_string();
    format!("SWIFT-{}", raw[..6].to_ascii_uppercase())
}
