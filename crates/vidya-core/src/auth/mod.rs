//! Authentication primitives shared by the authentication crate.

mod jwt_token;

pub use jwt_token::*;
