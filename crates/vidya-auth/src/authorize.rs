//! Step one of the sign-in handshake: drive the external browser to the authorization endpoint
//! and intercept the redirect.

use thiserror::Error;
use tracing::debug;
use vidya_core::ClientSettings;

use crate::browser::{AuthorizeBrowser, BrowserEvent, BrowserOpenError};

/// Errors from the browser-driven authorization step.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// The user closed the browser surface before reaching the redirect.
    #[error("The sign in flow was canceled")]
    FlowCanceled,

    /// The redirect arrived without any response parameters.
    #[error("Problem authenticating: the redirect carried no response parameters")]
    MissingResponseParameters,

    /// The browser surface could not be opened.
    #[error(transparent)]
    Browser(#[from] BrowserOpenError),
}

/// The immutable request driving step one, derived once from the client settings. The mobile
/// platform selects the OAuth client id embedded in the authorization URL.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    /// Fully substituted authorization endpoint URL the browser is opened at.
    pub authorize_url: String,
    /// Prefix identifying the post-login redirect.
    pub redirect_prefix: String,
}

impl AuthorizationRequest {
    #[allow(missing_docs)]
    pub fn new(settings: &ClientSettings) -> Self {
        let authorize_url = format!(
            "{}?redirect_uri={}&response_type=code&scope=offline_access&client_id={}",
            settings.auth_url,
            settings.redirect_uri,
            settings.platform.client_id(),
        );

        Self {
            authorize_url,
            redirect_prefix: settings.redirect_uri.clone(),
        }
    }
}

/// Drive the browser surface until a navigation reaches the redirect prefix or the user exits,
/// and return the raw query string of the redirect. The caller parses the authorization code out
/// of it.
///
/// Exactly one outcome is produced per call. The surface is closed and the event subscription
/// dropped before this function returns, so no navigation event is ever observed twice. There is
/// no internal timeout; callers wanting a bounded wait can wrap the future in
/// `tokio::time::timeout`.
pub(crate) async fn begin_authorization(
    browser: &dyn AuthorizeBrowser,
    request: &AuthorizationRequest,
) -> Result<String, AuthenticationError> {
    let mut handle = browser.open(&request.authorize_url).await?;

    while let Some(event) = handle.next_event().await {
        match event {
            BrowserEvent::NavigationStarted { url }
                if url.starts_with(&request.redirect_prefix) =>
            {
                handle.close().await;
                debug!("authorization redirect intercepted");

                return match url.split_once('?') {
                    Some((_, query)) if !query.is_empty() => Ok(query.to_string()),
                    _ => Err(AuthenticationError::MissingResponseParameters),
                };
            }
            // Intermediate navigations (login form, consent pages) are not ours to handle.
            BrowserEvent::NavigationStarted { .. } => {}
            BrowserEvent::Exited => return Err(AuthenticationError::FlowCanceled),
        }
    }

    // The surface went away without an exit event; treat it the same as a user cancel.
    Err(AuthenticationError::FlowCanceled)
}
