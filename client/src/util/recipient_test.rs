use super::*;

#[test]
fn phone_needs_ten_digits() {
    assert!(is_valid_phone("+254712345678"));
    assert!(is_valid_phone("0712345678"));
    assert!(!is_valid_phone("071234567"));
    assert!(!is_valid_phone(""));
}

#[test]
fn phone_ignores_separators() {
    assert!(is_valid_phone("+254 712 345 678"));
    assert!(is_valid_phone("(071) 234-5678"));
    assert!(!is_valid_phone("+254 7XX XXX XXX"));
}

#[test]
fn email_requires_user_domain_and_tld() {
    assert!(is_valid_email("john.doe@email.com"));
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("john.doe@email"));
    assert!(!is_valid_email("@email.com"));
    assert!(!is_valid_email("john doe@email.com"));
    assert!(!is_valid_email("john@@email.com"));
}

#[test]
fn is_valid_dispatches_on_kind() {
    assert!(is_valid(RecipientKind::Phone, "+254712345678"));
    assert!(!is_valid(RecipientKind::Email, "+254712345678"));
    assert!(is_valid(RecipientKind::Email, "x@y.io"));
    assert!(!is_valid(RecipientKind::Phone, "x@y.io"));
}

#[test]
fn recipient_kind_default_is_phone() {
    assert_eq!(RecipientKind::default(), RecipientKind::Phone);
    assert_eq!(RecipientKind::Phone.input_type(), "tel");
    assert_eq!(RecipientKind::Email.input_type(), "email");
}
