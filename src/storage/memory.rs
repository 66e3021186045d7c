//! In-memory slot for tests and embedding.

use std::collections::HashMap;
use std::io;

use super::Slot;
use crate::errors::Result;

/// A map-backed slot.  Writes can be switched off to simulate a full
/// or unavailable storage backend.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `write` fail (or succeed again).
    pub fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Overwrite a raw blob, bypassing the store (for corruption tests).
    pub fn put_raw(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Peek at a raw blob.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Slot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.reject_writes {
            return Err(io::Error::new(io::ErrorKind::Other, "slot rejects writes").into());
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_write_leaves_previous_value() {
        let mut slot = MemorySlot::new();
        slot.write("k", "v1").unwrap();
        slot.set_reject_writes(true);
        assert!(slot.write("k", "v2").is_err());
        assert_eq!(slot.read("k").unwrap().as_deref(), Some("v1"));
    }
}
