use serde::Deserialize;

/// The success body of the token endpoint. Only the fields this SDK consumes are modeled.
#[derive(Deserialize, Debug)]
pub(crate) struct TokenExchangeSuccessResponse {
    pub(crate) access_token: String,
    pub(crate) refresh_token: String,
}
