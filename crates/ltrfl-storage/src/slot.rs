//! Named key-value slots for whole-state persistence

use crate::io::atomic_write;
use crate::paths::Paths;
use std::cell::RefCell;
use std::collections::HashMap;

/// A durable store of named string slots
///
/// Each slot holds one serialized document. Writes replace the slot
/// wholesale; there is no merge.
pub trait SlotStorage {
    /// Read a slot, `None` if it was never written
    fn load(&self, slot: &str) -> std::io::Result<Option<String>>;

    /// Replace the contents of a slot
    fn save(&self, slot: &str, contents: &str) -> std::io::Result<()>;
}

/// One JSON file per slot under the data directory
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    paths: Paths,
}

impl FileSlotStorage {
    pub fn new(paths: Paths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }
}

impl SlotStorage for FileSlotStorage {
    fn load(&self, slot: &str) -> std::io::Result<Option<String>> {
        let path = self.paths.slot_file(slot);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, slot: &str, contents: &str) -> std::io::Result<()> {
        let path = self.paths.slot_file(slot);
        atomic_write(&path, contents.as_bytes())?;
        tracing::debug!(slot, path = %path.display(), bytes = contents.len(), "slot saved");
        Ok(())
    }
}

/// Process-local slots, for tests and embedding
#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemorySlotStorage {
    fn load(&self, slot: &str) -> std::io::Result<Option<String>> {
        Ok(self.slots.borrow().get(slot).cloned())
    }

    fn save(&self, slot: &str, contents: &str) -> std::io::Result<()> {
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_slot_roundtrip() {
        let temp = tempfile::TempDir::new().unwrap();
        let storage = FileSlotStorage::new(Paths::with_root(temp.path()));

        assert_eq!(storage.load("budget").unwrap(), None);

        storage.save("budget", "{\"version\":0}").unwrap();
        assert_eq!(
            storage.load("budget").unwrap().as_deref(),
            Some("{\"version\":0}")
        );

        storage.save("budget", "{\"version\":1}").unwrap();
        assert_eq!(
            storage.load("budget").unwrap().as_deref(),
            Some("{\"version\":1}")
        );
    }

    #[test]
    fn test_slots_are_independent() {
        let storage = MemorySlotStorage::new();
        storage.save("a", "1").unwrap();
        storage.save("b", "2").unwrap();

        storage.save("a", "3").unwrap();

        assert_eq!(storage.load("a").unwrap().as_deref(), Some("3"));
        assert_eq!(storage.load("b").unwrap().as_deref(), Some("2"));
        assert_eq!(storage.load("c").unwrap(), None);
    }
}
