use serde::Serialize;

use super::GrantType;

/// The URL-encoded body of the token exchange POST.
#[derive(Serialize, Debug)]
pub(crate) struct AuthorizationCodeTokenPayload {
    // Standard OAuth2 fields
    /// The redirect URI the authorization code was delivered to.
    pub(crate) redirect_uri: String,

    /// The authorization code extracted from the redirect query string.
    pub(crate) code: String,

    /// Always the authorization-code grant for this handshake.
    pub(crate) grant_type: GrantType,

    /// The OAuth client id registered for the embedding platform.
    pub(crate) client_id: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_url_encoded_authorization_code_body() {
        let payload = AuthorizationCodeTokenPayload {
            redirect_uri: "https://app.vidya.org/oauth2callback".into(),
            code: "abc123".into(),
            grant_type: GrantType::AuthorizationCode,
            client_id: "android",
        };

        let body = serde_urlencoded::to_string(&payload).unwrap();

        assert_eq!(
            body,
            "redirect_uri=https%3A%2F%2Fapp.vidya.org%2Foauth2callback\
             &code=abc123&grant_type=authorization_code&client_id=android"
        );
    }
}
