//! Display formatting for money, credits, and status labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::macros::format_description;

use crate::net::types::{PayoutStatus, SubscriptionStatus, TicketStatus};

/// Insert `,` separators every three digits.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount of US cents as dollars, e.g. `$1,234.56` or `-$0.50`.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(abs / 100), abs % 100)
}

/// Format a credit count with the right plural, e.g. `1 credit`, `2,500 credits`.
#[must_use]
pub fn format_credits(credits: i64) -> String {
    let sign = if credits < 0 { "-" } else { "" };
    let abs = credits.unsigned_abs();
    let unit = if abs == 1 { "credit" } else { "credits" };
    format!("{sign}{} {unit}", group_thousands(abs))
}

/// Format a Unix timestamp in milliseconds as a UTC calendar date (`YYYY-MM-DD`).
/// Timestamps outside the representable calendar range format as an empty string.
#[must_use]
pub fn format_date(epoch_ms: i64) -> String {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(epoch_ms) * 1_000_000)
        .ok()
        .and_then(|at| at.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_default()
}

#[must_use]
pub fn format_ticket_status(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "Open",
        TicketStatus::Pending => "Awaiting reply",
        TicketStatus::Resolved => "Resolved",
        TicketStatus::Closed => "Closed",
    }
}

#[must_use]
pub fn format_subscription_status(status: SubscriptionStatus) -> &'static str {
    match status {
        SubscriptionStatus::Active => "Active",
        SubscriptionStatus::Trialing => "Trial",
        SubscriptionStatus::PastDue => "Past due",
        SubscriptionStatus::Canceled => "Canceled",
    }
}

#[must_use]
pub fn format_payout_status(status: PayoutStatus) -> &'static str {
    match status {
        PayoutStatus::Requested => "Requested",
        PayoutStatus::Processing => "Processing",
        PayoutStatus::Paid => "Paid",
        PayoutStatus::Rejected => "Rejected",
    }
}

/// Shorten `text` to at most `max_chars` characters, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.truncate(out.trim_end().len());
    out.push('…');
    out
}
