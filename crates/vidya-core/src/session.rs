//! Session types and the storage seam the embedding application implements.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An authenticated platform session, created exactly once per successful handshake. A session is
/// immutable; a new handshake replaces it, it is never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The user identifier, taken from the `sub` claim of the access token.
    pub user_id: String,
    #[allow(missing_docs)]
    pub access_token: String,
    #[allow(missing_docs)]
    pub refresh_token: String,
}

/// An error persisting a session.
#[derive(Debug, Error)]
#[error("Failed to persist session: {0}")]
pub struct SessionStoreError(pub String);

/// Session storage owned by the embedding application, which persists identity across process
/// restarts. The SDK only ever creates sessions; reading them back is the application's concern.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a freshly established session, replacing any previous one.
    async fn create_session(&self, session: Session) -> Result<(), SessionStoreError>;
}
