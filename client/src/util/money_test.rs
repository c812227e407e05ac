use super::*;

// =============================================================
// Fee and rate math
// =============================================================

#[test]
fn fee_is_one_and_a_half_percent() {
    assert_eq!(fee(dec!(50)), dec!(0.75));
    assert_eq!(fee(dec!(100)), dec!(1.5));
}

#[test]
fn total_with_fee_is_exact() {
    assert_eq!(total_with_fee(dec!(50)), dec!(50.75));
    assert_eq!(total_with_fee(dec!(0.01)), dec!(0.01015));
}

#[test]
fn kes_equivalent_uses_fixed_rate() {
    assert_eq!(kes_equivalent(dec!(100)), dec!(15250));
    assert_eq!(kes_equivalent(dec!(250)), dec!(38125));
}

// =============================================================
// parse_amount
// =============================================================

#[test]
fn parse_amount_accepts_integers_and_decimals() {
    assert_eq!(parse_amount("50"), Some(dec!(50)));
    assert_eq!(parse_amount(" 12.5 "), Some(dec!(12.5)));
}

#[test]
fn parse_amount_rejects_blank_and_garbage() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("   "), None);
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("12..5"), None);
}

#[test]
fn parse_amount_keeps_sign_for_callers_to_validate() {
    assert_eq!(parse_amount("-5"), Some(dec!(-5)));
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_usd_pads_to_two_decimals() {
    assert_eq!(format_usd(dec!(250)), "250.00");
    assert_eq!(format_usd(dec!(299.25)), "299.25");
    assert_eq!(format_usd(dec!(0.5)), "0.50");
}

#[test]
fn format_usd_rounds_half_away_from_zero() {
    assert_eq!(format_usd(dec!(1.005)), "1.01");
    assert_eq!(format_usd(dec!(0.01015)), "0.01");
}

#[test]
fn format_usd_groups_thousands() {
    assert_eq!(format_usd(dec!(1234567.8)), "1,234,567.80");
    assert_eq!(format_usd(dec!(1000)), "1,000.00");
}

#[test]
fn format_usd_keeps_negative_sign() {
    assert_eq!(format_usd(dec!(-0.75)), "-0.75");
}

#[test]
fn format_kes_rounds_to_whole_shillings() {
    assert_eq!(format_kes(dec!(38125)), "38,125");
    assert_eq!(format_kes(kes_equivalent(dec!(33.33))), "5,083");
    assert_eq!(format_kes(dec!(999.5)), "1,000");
    assert_eq!(format_kes(dec!(0)), "0");
}

#[test]
fn format_plain_drops_trailing_zeros() {
    assert_eq!(format_plain(dec!(50.00)), "50");
    assert_eq!(format_plain(dec!(12.50)), "12.5");
}

// =============================================================
// Range limits
// =============================================================

#[test]
fn parse_amount_accepts_the_cap_and_rejects_beyond() {
    assert_eq!(parse_amount("1000000000"), Some(MAX_AMOUNT));
    assert_eq!(parse_amount("1000000000.01"), None);
    assert_eq!(parse_amount("-1000000000.01"), None);
    assert_eq!(parse_amount("10000000000000000000000000000"), None);
    assert_eq!(parse_amount("100000000000000000000000000000000"), None);
}

#[test]
fn arithmetic_saturates_instead_of_overflowing() {
    assert_eq!(kes_equivalent(Decimal::MAX), Decimal::MAX);
    assert_eq!(total_with_fee(Decimal::MAX), Decimal::MAX);
    assert!(fee(Decimal::MAX) > Decimal::ZERO);
}

#[test]
fn formatting_handles_extreme_values() {
    assert_eq!(format_usd(Decimal::MAX), "79,228,162,514,264,337,593,543,950,335.00");
    assert_eq!(format_kes(Decimal::MAX), "79,228,162,514,264,337,593,543,950,335");
    assert_eq!(format_usd(kes_equivalent(MAX_AMOUNT)), "152,500,000,000.00");
}
