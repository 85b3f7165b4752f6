mod grant_type;
mod token_request_payload;
mod token_response;

pub(crate) use grant_type::GrantType;
pub(crate) use token_request_payload::AuthorizationCodeTokenPayload;
pub(crate) use token_response::TokenExchangeSuccessResponse;
