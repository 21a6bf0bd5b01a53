use chrono::{DateTime, TimeZone, Utc};
use ltrfl_core::{BudgetConfig, GenerationInput, GenerationStore, StoreState};

pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()
}

/// Store with a fixed ceiling whose month window starts at `now`
pub fn store_at(budget_cents: i64, now: DateTime<Utc>) -> GenerationStore {
    GenerationStore::with_state(BudgetConfig::with_budget(budget_cents), StoreState::new(now))
}

pub fn generation(pipeline: &str, cost_cents: i64, latency_ms: i64) -> GenerationInput {
    GenerationInput::new(pipeline, format!("{pipeline} pipeline"), cost_cents, latency_ms)
}
