//! Local durable storage: data-dir paths, atomic writes, JSONL and named slots

mod io;
mod paths;
mod slot;

pub use io::{atomic_write, read_jsonl, write_jsonl};
pub use paths::Paths;
pub use slot::{FileSlotStorage, MemorySlotStorage, SlotStorage};
