//! Draft persistence
//!
//! The form mirrors its [`Application`] into a key-value store under a
//! single fixed key. The draft is read once at startup and rewritten after
//! every change.

mod file_store;
mod memory_store;
mod traits;

pub use file_store::FileDraftStore;
pub use memory_store::MemoryDraftStore;
pub use traits::DraftStore;

#[cfg(test)]
pub use traits::MockDraftStore;

use crate::state::Application;
use thiserror::Error;

/// Key the draft is stored under
pub const DRAFT_KEY: &str = "formData";

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("draft storage failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored draft is malformed: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("draft could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Read the stored draft.
///
/// `Ok(None)` means nothing has been stored yet.
pub fn load(store: &dyn DraftStore) -> Result<Option<Application>, DraftError> {
    match store.read(DRAFT_KEY)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(DraftError::Parse),
        None => Ok(None),
    }
}

/// Initial application state: the stored draft, or defaults when it is
/// absent or unreadable
pub fn restore(store: &dyn DraftStore) -> Application {
    match load(store) {
        Ok(Some(application)) => {
            tracing::info!(skills = application.skills.len(), "restored draft");
            application
        }
        Ok(None) => Application::default(),
        Err(err) => {
            tracing::warn!("failed to restore draft, starting empty: {err}");
            Application::default()
        }
    }
}

/// Overwrite the stored draft with the full application
pub fn persist(store: &mut dyn DraftStore, application: &Application) -> Result<(), DraftError> {
    let contents = serde_json::to_string(application).map_err(DraftError::Encode)?;
    store.write(DRAFT_KEY, &contents)
}
