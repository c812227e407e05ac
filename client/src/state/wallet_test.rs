use super::*;

// =============================================================
// Seed state
// =============================================================

#[test]
fn default_wallet_starts_with_seeded_history() {
    let wallet = WalletState::default();
    assert_eq!(wallet.balance, dec!(250.00));
    assert_eq!(wallet.transactions.len(), 3);
    assert_eq!(wallet.transactions[0].recipient, "+254712345678");
    assert_eq!(wallet.transactions[1].kind, TxKind::Deposit);
    assert_eq!(wallet.transactions[2].timestamp, "Jan 10, 4:45 PM");
    assert!(wallet.transactions.iter().all(|tx| tx.status == TxStatus::Completed));
    assert!(wallet.transactions.iter().all(|tx| !tx.is_fresh()));
}

#[test]
fn seeded_ids_are_unique() {
    let wallet = WalletState::default();
    assert_ne!(wallet.transactions[0].id, wallet.transactions[1].id);
    assert_ne!(wallet.transactions[1].id, wallet.transactions[2].id);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn deposit_credits_exact_amount() {
    let mut wallet = WalletState::empty(dec!(250.00));
    let tx = wallet.deposit(dec!(100)).clone();
    assert_eq!(wallet.balance, dec!(350.00));
    assert_eq!(tx.kind, TxKind::Deposit);
    assert_eq!(tx.recipient, CARD_DEPOSIT);
    assert_eq!(tx.currency, "USD");
    assert!(tx.is_fresh());
}

#[test]
fn send_debits_amount_plus_fee() {
    let mut wallet = WalletState::empty(dec!(350.00));
    let tx = wallet.send(dec!(50), "+254712345678").clone();
    assert_eq!(wallet.balance, dec!(299.25));
    assert_eq!(tx.kind, TxKind::Sent);
    assert_eq!(tx.amount, dec!(50));
    assert_eq!(tx.recipient, "+254712345678");
}

#[test]
fn demo_funds_record_their_source() {
    let mut wallet = WalletState::empty(dec!(0));
    wallet.add_demo_funds(dec!(500));
    assert_eq!(wallet.balance, dec!(500));
    assert_eq!(wallet.transactions[0].recipient, DEMO_FUNDS);
    assert_eq!(wallet.transactions[0].kind, TxKind::Deposit);
}

#[test]
fn n_operations_yield_n_rows_newest_first() {
    let mut wallet = WalletState::empty(dec!(1000));
    wallet.deposit(dec!(1));
    wallet.send(dec!(2), "a@b.co");
    wallet.add_demo_funds(dec!(3));
    wallet.send(dec!(4), "+254700000000");

    let amounts: Vec<_> = wallet.transactions.iter().map(|tx| tx.amount).collect();
    assert_eq!(amounts, vec![dec!(4), dec!(3), dec!(2), dec!(1)]);
}

#[test]
fn ledger_does_not_guard_overdraft() {
    let mut wallet = WalletState::empty(dec!(10));
    wallet.send(dec!(10), "+254712345678");
    assert_eq!(wallet.balance, dec!(-0.15));
}

#[test]
fn deposit_then_send_matches_worked_example() {
    let mut wallet = WalletState::default();
    wallet.deposit(dec!(100));
    assert_eq!(wallet.balance, dec!(350.00));
    assert_eq!(wallet.transactions.len(), 4);

    wallet.send(dec!(50), "+254712345678");
    assert_eq!(wallet.balance, dec!(299.25));
    assert_eq!(wallet.transactions.len(), 5);
    assert_eq!(wallet.transactions[0].kind, TxKind::Sent);
    assert_eq!(wallet.transactions[1].kind, TxKind::Deposit);
}

// =============================================================
// Queries
// =============================================================

#[test]
fn covers_requires_positive_amount_within_balance() {
    let wallet = WalletState::empty(dec!(250));
    assert!(wallet.covers(dec!(250)));
    assert!(wallet.covers(dec!(0.01)));
    assert!(!wallet.covers(dec!(250.01)));
    assert!(!wallet.covers(dec!(0)));
    assert!(!wallet.covers(dec!(-1)));
}

#[test]
fn recent_clamps_to_history_length() {
    let wallet = WalletState::default();
    assert_eq!(wallet.recent(2).len(), 2);
    assert_eq!(wallet.recent(10).len(), 3);
    assert!(WalletState::empty(dec!(0)).recent(3).is_empty());
}

// =============================================================
// Row presentation
// =============================================================

#[test]
fn kind_presentation_matches_direction() {
    assert_eq!(TxKind::Sent.sign(), "-");
    assert_eq!(TxKind::Received.sign(), "+");
    assert_eq!(TxKind::Deposit.sign(), "+");
    assert_eq!(TxKind::Sent.tone(), "destructive");
    assert_eq!(TxKind::Received.tone(), "success");
    assert_eq!(TxKind::Deposit.tone(), "primary");
}

#[test]
fn transaction_serializes_with_lowercase_enums() {
    let mut wallet = WalletState::empty(dec!(0));
    let tx = wallet.deposit(dec!(5)).clone();
    let value = serde_json::to_value(&tx).unwrap();
    assert_eq!(value["type"], "deposit");
    assert_eq!(value["status"], "completed");
    assert_eq!(value["currency"], "USD");
}

// =============================================================
// Extreme balances
// =============================================================

#[test]
fn credits_saturate_at_decimal_max() {
    let mut wallet = WalletState::empty(Decimal::MAX);
    wallet.deposit(dec!(1));
    wallet.add_demo_funds(dec!(1000));
    assert_eq!(wallet.balance, Decimal::MAX);
    assert_eq!(wallet.transactions.len(), 2);
    assert_eq!(money::format_kes(money::kes_equivalent(wallet.balance)), "79,228,162,514,264,337,593,543,950,335");
    assert_eq!(money::format_usd(wallet.balance), "79,228,162,514,264,337,593,543,950,335.00");
}

#[test]
fn repeated_cap_deposits_and_demo_funds_add_exactly() {
    let mut wallet = WalletState::empty(dec!(0));
    for _ in 0..3 {
        wallet.deposit(money::MAX_AMOUNT);
    }
    wallet.add_demo_funds(dec!(1000));
    assert_eq!(wallet.balance, dec!(3000001000));
}

#[test]
fn send_saturates_instead_of_underflowing() {
    let mut wallet = WalletState::empty(Decimal::MIN);
    wallet.send(money::MAX_AMOUNT, "+254712345678");
    assert_eq!(wallet.balance, Decimal::MIN);
}
