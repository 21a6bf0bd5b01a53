//! Generation record store with monthly budget rollover

use crate::budget::{month_start, same_month, status_at};
use crate::config::BudgetConfig;
use crate::error::{Result, StoreError};
use crate::leaderboard;
use crate::types::{
    BudgetStatus, GenerationInput, GenerationRecord, LeaderboardEntry, PipelineStats, StoreState,
};
use chrono::{DateTime, Utc};
use ltrfl_storage::SlotStorage;
use serde::{Deserialize, Serialize};

const STATE_VERSION: u32 = 0;

#[derive(Serialize)]
struct PersistedRef<'a> {
    state: &'a StoreState,
    version: u32,
}

#[derive(Deserialize)]
struct Persisted {
    state: StoreState,
    #[serde(default)]
    version: u32,
}

/// Append-only generation log plus derived budget and pipeline stats
///
/// Owns its state outright; persistence happens only through
/// [`GenerationStore::load_from`] and [`GenerationStore::save_to`].
#[derive(Debug, Clone)]
pub struct GenerationStore {
    config: BudgetConfig,
    state: StoreState,
}

impl GenerationStore {
    pub fn new(config: BudgetConfig) -> Self {
        Self::with_state(config, StoreState::new(Utc::now()))
    }

    pub fn with_state(config: BudgetConfig, state: StoreState) -> Self {
        Self { config, state }
    }

    /// Rehydrate from the configured slot, or start empty if it was never written
    pub fn load_from(storage: &dyn SlotStorage, config: BudgetConfig) -> Result<Self> {
        let Some(contents) = storage.load(&config.storage_slot)? else {
            tracing::debug!(slot = %config.storage_slot, "no persisted state, starting empty");
            return Ok(Self::new(config));
        };

        let persisted: Persisted = serde_json::from_str(&contents)?;
        if persisted.version > STATE_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: persisted.version,
                supported: STATE_VERSION,
            });
        }

        tracing::debug!(
            slot = %config.storage_slot,
            records = persisted.state.generation_history.len(),
            pipelines = persisted.state.pipeline_stats.len(),
            "state loaded"
        );
        Ok(Self::with_state(config, persisted.state))
    }

    /// Serialize the whole state into the configured slot
    pub fn save_to(&self, storage: &dyn SlotStorage) -> Result<()> {
        let json = serde_json::to_string(&PersistedRef {
            state: &self.state,
            version: STATE_VERSION,
        })?;
        storage.save(&self.config.storage_slot, &json)?;
        Ok(())
    }

    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Live history, oldest first
    pub fn history(&self) -> &[GenerationRecord] {
        &self.state.generation_history
    }

    pub fn pipeline_stats(&self, pipeline_id: &str) -> Option<&PipelineStats> {
        self.state.pipeline_stats.get(pipeline_id)
    }

    pub fn record_generation(&mut self, input: GenerationInput) -> String {
        self.record_generation_at(input, Utc::now())
    }

    /// Append a generation and return its id
    ///
    /// A write in a new calendar month drops the previous month's history
    /// and spend before appending. Pipeline stats carry over.
    pub fn record_generation_at(&mut self, input: GenerationInput, now: DateTime<Utc>) -> String {
        if !same_month(self.state.current_month_start, now) {
            tracing::info!(
                from = %self.state.current_month_start.format("%Y-%m"),
                to = %now.format("%Y-%m"),
                dropped_records = self.state.generation_history.len(),
                "budget month rolled over"
            );
            self.clear_month(now);
        }

        let record = GenerationRecord {
            id: new_generation_id(),
            timestamp: now,
            pipeline_id: input.pipeline_id,
            pipeline_name: input.pipeline_name,
            cost_cents: input.cost_cents,
            latency_ms: input.latency_ms,
            content_type: input.content_type,
            city_id: input.city_id,
            was_winner: false,
        };

        self.state.total_spent_cents = self
            .state
            .total_spent_cents
            .saturating_add(record.cost_cents);
        self.state
            .pipeline_stats
            .entry(record.pipeline_id.clone())
            .or_default()
            .observe(record.cost_cents, record.latency_ms);

        tracing::debug!(
            id = %record.id,
            pipeline = %record.pipeline_id,
            cost_cents = record.cost_cents,
            latency_ms = record.latency_ms,
            "generation recorded"
        );

        let id = record.id.clone();
        self.state.generation_history.push(record);
        id
    }

    /// Mark a generation as the winner of a comparison
    ///
    /// Returns whether anything changed. Unknown ids and records already
    /// marked are no-ops.
    pub fn record_winner(&mut self, id: &str) -> bool {
        let Some(record) = self
            .state
            .generation_history
            .iter_mut()
            .find(|r| r.id == id)
        else {
            tracing::debug!(id, "winner for unknown generation ignored");
            return false;
        };

        if record.was_winner {
            return false;
        }
        record.was_winner = true;

        self.state
            .pipeline_stats
            .entry(record.pipeline_id.clone())
            .or_default()
            .record_win();
        tracing::debug!(id, pipeline = %record.pipeline_id, "winner recorded");
        true
    }

    pub fn budget_status(&self) -> BudgetStatus {
        self.budget_status_at(Utc::now())
    }

    /// Budget for the month containing `now`; never mutates
    pub fn budget_status_at(&self, now: DateTime<Utc>) -> BudgetStatus {
        status_at(&self.state, self.config.monthly_budget_cents, now)
    }

    pub fn pipeline_leaderboard(&self) -> Vec<LeaderboardEntry> {
        leaderboard::build(&self.state)
    }

    pub fn reset_month(&mut self) {
        self.reset_month_at(Utc::now())
    }

    /// Manual reset of the month window, history and spend
    pub fn reset_month_at(&mut self, now: DateTime<Utc>) {
        tracing::info!(
            month = %now.format("%Y-%m"),
            dropped_records = self.state.generation_history.len(),
            spent_cents = self.state.total_spent_cents,
            "budget month reset"
        );
        self.clear_month(now);
    }

    fn clear_month(&mut self, now: DateTime<Utc>) {
        self.state.current_month_start = month_start(now);
        self.state.total_spent_cents = 0;
        self.state.generation_history.clear();
    }
}

fn new_generation_id() -> String {
    format!("gen_{}", uuid::Uuid::new_v4().simple())
}
