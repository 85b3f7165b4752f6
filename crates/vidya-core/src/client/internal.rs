//! Shared state behind the [`Client`](crate::Client) handle.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::{
    client::ClientSettings,
    session::{Session, SessionStore, SessionStoreError},
};

/// How the active session is stored.
pub(crate) enum Sessions {
    /// Held in process memory by the SDK.
    SdkManaged(RwLock<Option<Session>>),
    /// Persisted by the embedding application.
    ClientManaged(Arc<dyn SessionStore>),
}

impl std::fmt::Debug for Sessions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sessions::SdkManaged(_) => f.write_str("SdkManaged"),
            Sessions::ClientManaged(_) => f.write_str("ClientManaged"),
        }
    }
}

#[allow(missing_docs)]
#[derive(Debug)]
pub struct InternalClient {
    pub(crate) sessions: Sessions,
    pub(crate) settings: ClientSettings,

    /// Reqwest client shared by all SDK requests.
    pub(crate) http_client: reqwest::Client,
}

impl InternalClient {
    /// The settings this client was initialized with.
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    #[allow(missing_docs)]
    pub fn get_http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Persist a freshly established session, replacing any previous one. A session is only ever
    /// written whole; there is no partial update path.
    pub async fn create_session(&self, session: Session) -> Result<(), SessionStoreError> {
        debug!(user_id = %session.user_id, "creating session");
        match &self.sessions {
            Sessions::SdkManaged(cell) => {
                *cell.write().expect("RwLock is not poisoned") = Some(session);
                Ok(())
            }
            Sessions::ClientManaged(store) => store.create_session(session).await,
        }
    }

    /// The active session, when the SDK manages session storage. Returns `None` for
    /// client-managed storage; the embedding application owns the persisted identity there.
    pub fn active_session(&self) -> Option<Session> {
        match &self.sessions {
            Sessions::SdkManaged(cell) => cell.read().expect("RwLock is not poisoned").clone(),
            Sessions::ClientManaged(_) => None,
        }
    }
}
