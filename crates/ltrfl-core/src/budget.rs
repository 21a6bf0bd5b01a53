//! Monthly budget window and status derivation

use crate::types::{BudgetStatus, StoreState};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// First instant (UTC) of the calendar month containing `now`
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(now)
}

/// True when both instants fall in the same calendar month
pub fn same_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Status for a given spend against a ceiling
pub fn status_for(total_budget_cents: i64, spent_cents: i64) -> BudgetStatus {
    let remaining_cents = total_budget_cents.saturating_sub(spent_cents).max(0);
    let percent_used = if total_budget_cents > 0 {
        (spent_cents as f64 / total_budget_cents as f64 * 100.0).min(100.0)
    } else if spent_cents > 0 {
        100.0
    } else {
        0.0
    };

    BudgetStatus {
        total_budget_cents,
        spent_cents,
        remaining_cents,
        percent_used,
        can_generate: remaining_cents > 0,
    }
}

/// Read-side rollover: a stale month reports as empty, state is untouched
pub fn status_at(state: &StoreState, total_budget_cents: i64, now: DateTime<Utc>) -> BudgetStatus {
    if same_month(state.current_month_start, now) {
        status_for(total_budget_cents, state.total_spent_cents)
    } else {
        status_for(total_budget_cents, 0)
    }
}
