//! Configuration for budget tracking

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MONTHLY_BUDGET_CENTS: i64 = 100_000;
pub const DEFAULT_WARNING_PERCENT: f64 = 80.0;
pub const DEFAULT_STORAGE_SLOT: &str = "generation-budget";

/// Budget configuration, supplied by the hosting application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Monthly spending ceiling
    pub monthly_budget_cents: i64,

    /// Percent used at which callers should start warning
    pub warning_percent: f64,

    /// Slot name the store persists under
    pub storage_slot: String,
}

impl BudgetConfig {
    pub fn new() -> Self {
        Self {
            monthly_budget_cents: DEFAULT_MONTHLY_BUDGET_CENTS,
            warning_percent: DEFAULT_WARNING_PERCENT,
            storage_slot: DEFAULT_STORAGE_SLOT.to_string(),
        }
    }

    pub fn with_budget(monthly_budget_cents: i64) -> Self {
        Self {
            monthly_budget_cents,
            ..Self::new()
        }
    }

    /// Load from a JSON file, falling back to defaults when missing or unreadable
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "cannot read config, using defaults: {e}");
                return Self::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "malformed config, using defaults: {e}");
                Self::new()
            }
        }
    }

    /// Write this config as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        ltrfl_storage::atomic_write(path, json.as_bytes())
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self::new()
    }
}
