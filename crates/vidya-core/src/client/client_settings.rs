use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the various targets and behavior of the
/// Vidya client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use vidya_core::{ClientSettings, MobilePlatform};
/// let settings = ClientSettings {
///     auth_url: "https://auth.vidya.org/auth/realms/vidya/protocol/openid-connect/auth"
///         .to_string(),
///     token_url: "https://auth.vidya.org/auth/realms/vidya/protocol/openid-connect/token"
///         .to_string(),
///     redirect_uri: "https://app.vidya.org/oauth2callback".to_string(),
///     user_agent: "Vidya Rust-SDK".to_string(),
///     platform: MobilePlatform::Android,
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The authorization endpoint of the identity realm the handshake starts at.
    pub auth_url: String,
    /// The token endpoint the authorization code is exchanged at.
    pub token_url: String,
    /// The redirect URI registered for the mobile clients. Navigations to URLs with this prefix
    /// terminate the authorization step.
    pub redirect_uri: String,
    /// The user_agent sent with every request. Defaults to `Vidya Rust-SDK`
    pub user_agent: String,
    /// Mobile OS family the SDK is embedded in; selects the OAuth client id.
    pub platform: MobilePlatform,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            auth_url: "https://auth.vidya.org/auth/realms/vidya/protocol/openid-connect/auth"
                .into(),
            token_url: "https://auth.vidya.org/auth/realms/vidya/protocol/openid-connect/token"
                .into(),
            redirect_uri: "https://app.vidya.org/oauth2callback".into(),
            user_agent: "Vidya Rust-SDK".into(),
            platform: MobilePlatform::Android,
        }
    }
}

/// Mobile OS family an embedding application runs on. Each family has its own OAuth client id
/// registered with the identity realm.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MobilePlatform {
    Android,
    Ios,
}

impl MobilePlatform {
    /// The OAuth client id registered for this platform.
    pub fn client_id(&self) -> &'static str {
        match self {
            MobilePlatform::Android => "android",
            MobilePlatform::Ios => "ios",
        }
    }
}
