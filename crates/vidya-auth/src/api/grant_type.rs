use serde::Serialize;

/// OAuth2 grant types this SDK requests at the token endpoint.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GrantType {
    /// The authorization-code grant used by the sign-in handshake.
    #[serde(rename = "authorization_code")]
    AuthorizationCode,
}
