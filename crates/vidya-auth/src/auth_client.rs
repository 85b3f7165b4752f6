use vidya_core::Client;

use crate::{
    authorize::{begin_authorization, AuthenticationError, AuthorizationRequest},
    browser::AuthorizeBrowser,
    token::{exchange_code_for_session, TokenExchangeError},
};

/// Subclient containing the sign-in handshake.
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) client: Client,
}

impl AuthClient {
    /// Constructs a new `AuthClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Step one of the handshake: drive `browser` through the authorization endpoint and return
    /// the raw query string of the intercepted redirect. The caller parses the authorization
    /// code out of it and feeds it to [`AuthClient::exchange_code_for_session`].
    pub async fn begin_authorization(
        &self,
        browser: &dyn AuthorizeBrowser,
    ) -> Result<String, AuthenticationError> {
        let request = AuthorizationRequest::new(self.client.internal.settings());
        begin_authorization(browser, &request).await
    }

    /// Step two of the handshake: exchange the authorization code for tokens and persist the
    /// resulting session.
    pub async fn exchange_code_for_session(&self, code: &str) -> Result<(), TokenExchangeError> {
        exchange_code_for_session(&self.client, code).await
    }
}

/// Extension trait for `Client` to provide access to the `AuthClient`.
pub trait AuthClientExt {
    /// Creates a new `AuthClient` instance.
    fn auth(&self) -> AuthClient;
}

impl AuthClientExt for Client {
    fn auth(&self) -> AuthClient {
        AuthClient {
            client: self.clone(),
        }
    }
}
