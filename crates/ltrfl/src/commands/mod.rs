pub mod budget;
pub mod export;
pub mod history;
pub mod init;
pub mod leaderboard;
pub mod record;
pub mod reset;
pub mod version;
pub mod winner;

use anyhow::Context;
use ltrfl_core::{BudgetConfig, GenerationStore};
use ltrfl_storage::{FileSlotStorage, Paths};

/// Store loaded from the data directory, saved back explicitly after mutation
pub struct Session {
    storage: FileSlotStorage,
    pub store: GenerationStore,
}

impl Session {
    pub fn open(paths: &Paths) -> anyhow::Result<Self> {
        let config = BudgetConfig::load(&paths.config_file());
        let slot_path = paths.slot_file(&config.storage_slot);
        let storage = FileSlotStorage::new(paths.clone());
        let store = GenerationStore::load_from(&storage, config)
            .with_context(|| format!("failed to load state from {}", slot_path.display()))?;
        Ok(Self { storage, store })
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.store.save_to(&self.storage).with_context(|| {
            format!(
                "failed to save state to {}",
                self.storage
                    .paths()
                    .slot_file(&self.store.config().storage_slot)
                    .display()
            )
        })
    }
}
