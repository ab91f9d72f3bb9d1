use super::*;

// =============================================================
// group_thousands
// =============================================================

#[test]
fn group_thousands_small_numbers_unchanged() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
}

#[test]
fn group_thousands_inserts_separators() {
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

// =============================================================
// format_cents / format_credits
// =============================================================

#[test]
fn format_cents_pads_fraction() {
    assert_eq!(format_cents(5), "$0.05");
    assert_eq!(format_cents(123_456), "$1,234.56");
}

#[test]
fn format_cents_negative() {
    assert_eq!(format_cents(-50), "-$0.50");
}

#[test]
fn format_cents_extreme_does_not_overflow() {
    assert!(format_cents(i64::MIN).starts_with("-$"));
}

#[test]
fn format_credits_singular_and_plural() {
    assert_eq!(format_credits(1), "1 credit");
    assert_eq!(format_credits(0), "0 credits");
    assert_eq!(format_credits(2_500), "2,500 credits");
    assert_eq!(format_credits(-1), "-1 credit");
}

// =============================================================
// format_date
// =============================================================

#[test]
fn format_date_epoch() {
    assert_eq!(format_date(0), "1970-01-01");
}

#[test]
fn format_date_known_instants() {
    assert_eq!(format_date(1_700_000_000_000), "2023-11-14");
    assert_eq!(format_date(951_782_400_000), "2000-02-29");
}

#[test]
fn format_date_before_epoch() {
    assert_eq!(format_date(-1), "1969-12-31");
}

#[test]
fn format_date_out_of_range_is_empty() {
    assert_eq!(format_date(i64::MAX), "");
}

// =============================================================
// Status labels
// =============================================================

#[test]
fn status_labels_are_human_readable() {
    assert_eq!(format_ticket_status(TicketStatus::Pending), "Awaiting reply");
    assert_eq!(format_subscription_status(SubscriptionStatus::PastDue), "Past due");
    assert_eq!(format_payout_status(PayoutStatus::Paid), "Paid");
}

// =============================================================
// truncate
// =============================================================

#[test]
fn truncate_keeps_short_text() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn truncate_adds_ellipsis() {
    assert_eq!(truncate("hello world", 7), "hello…");
}

#[test]
fn truncate_counts_chars_not_bytes() {
    assert_eq!(truncate("héllo wörld", 5), "héll…");
}

#[test]
fn truncate_zero_is_empty() {
    assert_eq!(truncate("hello", 0), "");
}
