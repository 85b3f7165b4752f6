//! Step two of the sign-in handshake: exchange the authorization code for tokens and establish
//! the session.

use thiserror::Error;
use vidya_core::{
    auth::{JwtToken, JwtTokenParseError},
    session::{Session, SessionStoreError},
    ApiError, Client,
};

use crate::api::{AuthorizationCodeTokenPayload, GrantType, TokenExchangeSuccessResponse};

/// Errors from the token exchange step. These propagate to the caller; the sign-in flow must
/// know when it failed.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum TokenExchangeError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Token(#[from] JwtTokenParseError),

    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

// This is just a utility function so that the ? operator works correctly without manual mapping
impl From<reqwest::Error> for TokenExchangeError {
    fn from(value: reqwest::Error) -> Self {
        Self::Api(ApiError::Reqwest(value))
    }
}

/// Exchange the authorization code for tokens, decode the user identifier out of the access
/// token, and persist the resulting session.
///
/// Exactly one session is created on success. Any failure, including a malformed access token,
/// leaves no partial session state behind.
pub(crate) async fn exchange_code_for_session(
    client: &Client,
    code: &str,
) -> Result<(), TokenExchangeError> {
    let settings = client.internal.settings();

    let payload = AuthorizationCodeTokenPayload {
        redirect_uri: settings.redirect_uri.clone(),
        code: code.to_string(),
        grant_type: GrantType::AuthorizationCode,
        client_id: settings.platform.client_id(),
    };

    let request = client
        .internal
        .get_http_client()
        .post(&settings.token_url)
        .header(
            reqwest::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded; charset=utf-8",
        )
        .header(reqwest::header::ACCEPT, "application/json")
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .body(serde_urlencoded::to_string(&payload).expect("Serialize should be infallible"));

    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::ResponseContent { status, message }.into());
    }

    let tokens: TokenExchangeSuccessResponse = response.json().await?;

    // The user identifier is the subject claim of the access token.
    let access_token_obj: JwtToken = tokens.access_token.parse()?;

    client
        .internal
        .create_session(Session {
            user_id: access_token_obj.sub,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
        .await?;

    Ok(())
}
