//! Core types for generation tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One AI generation call
///
/// Everything except `was_winner` is fixed at append time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub pipeline_id: String,
    pub pipeline_name: String,
    pub cost_cents: i64,
    pub latency_ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<String>,
    #[serde(default)]
    pub was_winner: bool,
}

/// Caller-supplied fields of a generation, before id and timestamp exist
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationInput {
    pub pipeline_id: String,
    pub pipeline_name: String,
    pub cost_cents: i64,
    pub latency_ms: i64,
    pub content_type: Option<String>,
    pub city_id: Option<String>,
}

impl GenerationInput {
    pub fn new(
        pipeline_id: impl Into<String>,
        pipeline_name: impl Into<String>,
        cost_cents: i64,
        latency_ms: i64,
    ) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
            pipeline_name: pipeline_name.into(),
            cost_cents,
            latency_ms,
            content_type: None,
            city_id: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_city(mut self, city_id: impl Into<String>) -> Self {
        self.city_id = Some(city_id.into());
        self
    }
}

/// Running per-pipeline aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStats {
    pub total_generations: u64,
    pub total_wins: u64,
    pub total_cost_cents: i64,
    pub avg_latency_ms: f64,
}

impl PipelineStats {
    /// Fold one generation into the aggregates without rescanning history
    pub fn observe(&mut self, cost_cents: i64, latency_ms: i64) {
        let n = self.total_generations as f64;
        self.avg_latency_ms = (self.avg_latency_ms * n + latency_ms as f64) / (n + 1.0);
        self.total_generations += 1;
        self.total_cost_cents = self.total_cost_cents.saturating_add(cost_cents);
    }

    pub fn record_win(&mut self) {
        self.total_wins += 1;
    }

    /// Percentage of generations picked as winners, 0 when empty
    pub fn win_rate(&self) -> f64 {
        if self.total_generations == 0 {
            return 0.0;
        }
        self.total_wins as f64 / self.total_generations as f64 * 100.0
    }

    pub fn avg_cost_cents(&self) -> f64 {
        if self.total_generations == 0 {
            return 0.0;
        }
        self.total_cost_cents as f64 / self.total_generations as f64
    }
}

/// Persisted store state (camelCase to match the slot written by the web client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    #[serde(default)]
    pub generation_history: Vec<GenerationRecord>,
    pub current_month_start: DateTime<Utc>,
    #[serde(default)]
    pub total_spent_cents: i64,
    #[serde(default)]
    pub pipeline_stats: HashMap<String, PipelineStats>,
}

impl StoreState {
    /// Empty state for the month containing `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            generation_history: Vec::new(),
            current_month_start: crate::budget::month_start(now),
            total_spent_cents: 0,
            pipeline_stats: HashMap::new(),
        }
    }
}

/// How close the month is to its ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Ok,
    Warning,
    Exhausted,
}

/// Snapshot of the current month's spend against the ceiling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub total_budget_cents: i64,
    pub spent_cents: i64,
    pub remaining_cents: i64,
    pub percent_used: f64,
    /// Advisory only; the store never refuses a record
    pub can_generate: bool,
}

impl BudgetStatus {
    pub fn level(&self, warning_percent: f64) -> BudgetLevel {
        if !self.can_generate {
            BudgetLevel::Exhausted
        } else if self.percent_used >= warning_percent {
            BudgetLevel::Warning
        } else {
            BudgetLevel::Ok
        }
    }
}

/// One ranked pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub pipeline_id: String,
    pub pipeline_name: String,
    pub total_generations: u64,
    pub win_rate: f64,
    pub avg_cost_cents: f64,
    pub avg_latency_ms: f64,
}
