#![doc = include_str!("../README.md")]

pub mod auth;
pub mod client;
mod error;
pub mod preferences;
pub mod session;

pub use client::{Client, ClientSettings, MobilePlatform};
pub use error::{ApiError, MissingFieldError};
