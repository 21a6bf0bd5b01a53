//! Pipeline ranking

use crate::types::{LeaderboardEntry, StoreState};
use std::cmp::Ordering;

/// Rank every pipeline with stats
///
/// Order: win rate desc, then generations desc, then average cost asc,
/// then pipeline id.
pub fn build(state: &StoreState) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = state
        .pipeline_stats
        .iter()
        .map(|(pipeline_id, stats)| LeaderboardEntry {
            pipeline_id: pipeline_id.clone(),
            pipeline_name: resolve_name(state, pipeline_id),
            total_generations: stats.total_generations,
            win_rate: stats.win_rate(),
            avg_cost_cents: stats.avg_cost_cents(),
            avg_latency_ms: stats.avg_latency_ms,
        })
        .collect();

    entries.sort_by(compare);
    entries
}

fn compare(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.win_rate
        .total_cmp(&a.win_rate)
        .then_with(|| b.total_generations.cmp(&a.total_generations))
        .then_with(|| a.avg_cost_cents.total_cmp(&b.avg_cost_cents))
        .then_with(|| a.pipeline_id.cmp(&b.pipeline_id))
}

/// Most recent display name seen in history, else the raw id
fn resolve_name(state: &StoreState, pipeline_id: &str) -> String {
    state
        .generation_history
        .iter()
        .rev()
        .find(|r| r.pipeline_id == pipeline_id)
        .map(|r| r.pipeline_name.clone())
        .unwrap_or_else(|| pipeline_id.to_string())
}
