//! Generation spend tracking: record store, monthly budget and pipeline leaderboard

pub mod budget;
mod config;
mod error;
pub mod leaderboard;
mod store;
mod types;

pub use config::{BudgetConfig, DEFAULT_MONTHLY_BUDGET_CENTS, DEFAULT_WARNING_PERCENT};
pub use error::{Result, StoreError};
pub use store::GenerationStore;
pub use types::{
    BudgetLevel, BudgetStatus, GenerationInput, GenerationRecord, LeaderboardEntry,
    PipelineStats, StoreState,
};
