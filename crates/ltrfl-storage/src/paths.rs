//! Path resolution for the local data directory

use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = ".ltrfl";

/// Resolves standard paths under the data directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// Resolve `$HOME/.ltrfl`
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;
        Ok(Self::with_root(home.join(DATA_DIR_NAME)))
    }

    /// Use an explicit data directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Directory holding one JSON file per storage slot
    pub fn slots_dir(&self) -> PathBuf {
        self.root.join("slots")
    }

    /// Get the file backing a named slot
    pub fn slot_file(&self, slot: &str) -> PathBuf {
        let safe = slot.replace(['/', '\\', '.'], "-");
        self.slots_dir().join(format!("{safe}.json"))
    }

    /// Default location for history exports
    pub fn exports_dir(&self) -> PathBuf {
        self.root.join("exports")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_paths_new_under_home() {
        let paths = Paths::new().unwrap();
        assert!(paths.root().ends_with(".ltrfl"));
    }

    #[test]
    fn test_config_file() {
        let paths = Paths::with_root("/tmp/ltrfl-test");
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/tmp/ltrfl-test/config.json")
        );
    }

    #[test]
    fn test_slot_file_sanitizes_name() {
        let paths = Paths::with_root("/tmp/ltrfl-test");
        let slot = paths.slot_file("../budget.v2");
        assert_eq!(slot, PathBuf::from("/tmp/ltrfl-test/slots/---budget-v2.json"));
        assert!(slot.starts_with(paths.slots_dir()));
    }
}
