use std::sync::{Arc, RwLock};

use reqwest::header::{self, HeaderValue};

use super::internal::{InternalClient, Sessions};
use crate::{client::ClientSettings, session::SessionStore};

/// The main struct to interact with the Vidya SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance, so that every subclient observes the same session and
    // settings. Any mutable state lives behind the shared [`InternalClient`].
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new Vidya client with SDK-managed session storage.
    pub fn new(settings: Option<ClientSettings>) -> Self {
        Self::new_internal(settings, Sessions::SdkManaged(RwLock::new(None)))
    }

    /// Create a new Vidya client whose sessions are persisted by the embedding application.
    pub fn new_with_session_store(
        settings: Option<ClientSettings>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self::new_internal(settings, Sessions::ClientManaged(store))
    }

    fn new_internal(settings_input: Option<ClientSettings>, sessions: Sessions) -> Self {
        let settings = settings_input.unwrap_or_default();

        let mut headers = header::HeaderMap::new();
        headers.append(
            header::USER_AGENT,
            HeaderValue::from_str(&settings.user_agent)
                .expect("User agent should be a valid header value"),
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("HTTP Client build should not fail");

        Self {
            internal: Arc::new(InternalClient {
                sessions,
                settings,
                http_client,
            }),
        }
    }
}
