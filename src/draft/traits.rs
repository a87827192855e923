//! Trait abstraction for the draft key-value store to enable mocking in tests

use super::DraftError;

/// Key-value surface holding serialized drafts
#[cfg_attr(test, mockall::automock)]
pub trait DraftStore {
    /// Read the raw document stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<String>, DraftError>;

    /// Overwrite the document stored under `key`
    fn write(&mut self, key: &str, contents: &str) -> Result<(), DraftError>;
}
