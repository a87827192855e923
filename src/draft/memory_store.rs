//! In-memory drafts, lost when the process exits

use super::{DraftError, DraftStore};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
    entries: HashMap<String, String>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn read(&self, key: &str) -> Result<Option<String>, DraftError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, contents: &str) -> Result<(), DraftError> {
        self.entries.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}
