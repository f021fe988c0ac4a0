//! Revenue and weekly visit aggregation.
//!
//! Total revenue is a plain sum over the invoice snapshot. The weekly series
//! buckets recently seen visits (completed or billed tokens) by age in days.
//! Both are recomputed in full on every invocation, never patched
//! incrementally, so missed or duplicated feed deliveries cannot cause
//! drift.

use chrono::{DateTime, Utc};

use clinicdesk_invoicing::{Amount, Invoice};
use clinicdesk_tokens::{Token, TokenStatus};

/// Length of the visit series: today plus the six preceding days.
pub const SERIES_DAYS: usize = 7;

/// Derived revenue state for the home dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevenueStats {
    pub revenue: Amount,
    /// Visit counts indexed oldest-first: `series[6]` is today,
    /// `series[0]` six days ago.
    pub series: [u32; SERIES_DAYS],
}

impl RevenueStats {
    pub fn compute(invoices: &[Invoice], tokens: &[Token], now: DateTime<Utc>) -> Self {
        Self {
            revenue: total_revenue(invoices),
            series: weekly_visit_series(tokens, now),
        }
    }
}

/// Sum of all invoice amounts.
///
/// Malformed amounts already coerced to zero at decode time, so the sum is
/// total over any snapshot. Empty snapshot sums to zero.
pub fn total_revenue(invoices: &[Invoice]) -> Amount {
    invoices.iter().map(|i| i.amount).sum()
}

/// Bucket completed/billed tokens by age in days.
///
/// `days_ago = floor((now − created_at) / 1 day)`; a token lands in bucket
/// `6 − days_ago` when `0 ≤ days_ago < 7`. Tokens with no resolvable
/// `created_at`, a future `created_at`, or age of a week or more appear in no
/// bucket.
pub fn weekly_visit_series(tokens: &[Token], now: DateTime<Utc>) -> [u32; SERIES_DAYS] {
    let mut buckets = [0u32; SERIES_DAYS];

    for token in tokens {
        if !matches!(token.status, TokenStatus::Completed | TokenStatus::Billed) {
            continue;
        }
        let Some(created_at) = token.created_at else {
            continue;
        };
        // Floor division so a visit 23h old is 0 days ago and one an hour in
        // the future is -1, not 0.
        let days_ago = (now - created_at).num_seconds().div_euclid(86_400);
        if (0..SERIES_DAYS as i64).contains(&days_ago) {
            buckets[(SERIES_DAYS as i64 - 1 - days_ago) as usize] += 1;
        }
    }

    buckets
}
