use vidya_core::{ClientSettings, MobilePlatform};

/// Helper for testing the Vidya SDK using wiremock.
///
/// Returns client settings whose identity endpoints point at the mock server.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before the test completes.
pub async fn start_api_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, ClientSettings) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let settings = ClientSettings {
        auth_url: format!(
            "{}/auth/realms/vidya/protocol/openid-connect/auth",
            server.uri()
        ),
        token_url: format!(
            "{}/auth/realms/vidya/protocol/openid-connect/token",
            server.uri()
        ),
        redirect_uri: "https://app.vidya.org/oauth2callback".into(),
        user_agent: "Vidya Rust-SDK [TEST]".into(),
        platform: MobilePlatform::Android,
    };

    (server, settings)
}
