//! Key/value preference storage owned by the embedding application.

use async_trait::async_trait;
use thiserror::Error;

/// Preference key holding the user's selected UI language code.
pub const SELECTED_LANGUAGE_CODE: &str = "selected_language_code";

/// Preference key holding the framework id the user currently works in.
pub const CURRENT_FRAMEWORK_ID: &str = "current_framework_id";

/// An error reading a preference.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// An internal unspecified error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Asynchronous string key/value storage provided by the embedding application.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a preference value. Returns `None` when the key has never been written.
    async fn get_string(&self, key: &str) -> Result<Option<String>, PreferenceError>;
}
