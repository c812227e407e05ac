use rust_decimal_macros::dec;

use super::*;
use crate::state::wallet::WalletState;

#[test]
fn amount_step_accepts_any_positive_amount() {
    let cases = [("", false), ("0", false), ("-1", false), ("x", false), ("0.5", true), ("100000", true)];
    for (input, expected) in cases {
        let flow = DepositFlow { amount_input: input.to_owned(), ..DepositFlow::default() };
        assert_eq!(flow.can_continue(), expected, "input {input:?}");
    }
}

#[test]
fn preset_fills_amount_field() {
    let mut flow = DepositFlow::default();
    flow.choose_preset(DEPOSIT_PRESETS[1]);
    assert_eq!(flow.amount_input, "100");
    assert!(flow.advance());
    assert_eq!(flow.step, DepositStep::Payment);
}

#[test]
fn source_only_selectable_on_payment_step() {
    let mut flow = DepositFlow { amount_input: "50".to_owned(), ..DepositFlow::default() };
    assert!(!flow.choose_source(FundingSource::Card));
    assert_eq!(flow.source, None);

    flow.advance();
    assert!(flow.choose_source(FundingSource::ApplePay));
    assert_eq!(flow.step, DepositStep::Processing);
    assert_eq!(flow.source, Some(FundingSource::ApplePay));
}

#[test]
fn finish_credits_once_and_shows_success() {
    let mut wallet = WalletState::empty(dec!(250.00));
    let mut flow = DepositFlow { amount_input: "100".to_owned(), ..DepositFlow::default() };
    flow.advance();
    flow.choose_source(FundingSource::GooglePay);

    let amount = flow.finish().unwrap();
    wallet.deposit(amount);
    assert_eq!(wallet.balance, dec!(350.00));
    assert_eq!(flow.step, DepositStep::Success);
    assert_eq!(flow.finish(), None);
}

#[test]
fn reset_returns_to_initial_state() {
    let mut flow = DepositFlow { amount_input: "20".to_owned(), ..DepositFlow::default() };
    flow.advance();
    flow.choose_source(FundingSource::Card);
    flow.reset();
    assert_eq!(flow, DepositFlow::default());
    assert_eq!(flow.finish(), None);
}

#[test]
fn funding_sources_are_listed_in_display_order() {
    let labels: Vec<_> = FundingSource::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Google Pay", "Apple Pay", "Debit/Credit Card"]);
}

#[test]
fn amount_step_caps_deposits() {
    let at_cap = DepositFlow { amount_input: "1000000000".to_owned(), ..DepositFlow::default() };
    assert_eq!(at_cap.amount(), Some(crate::util::money::MAX_AMOUNT));
    assert!(at_cap.can_continue());

    for over in ["1000000000.01", "10000000000000000000000000000", "1e40"] {
        let flow = DepositFlow { amount_input: over.to_owned(), ..DepositFlow::default() };
        assert!(!flow.can_continue(), "input {over:?}");
    }
}
