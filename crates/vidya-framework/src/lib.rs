#![doc = include_str!("../README.md")]

mod cache;
mod form_framework_client;
#[cfg(test)]
mod test_support;

pub mod category;
pub mod config;
pub mod events;
pub mod profile;
pub mod services;
pub mod upgrade;

pub use form_framework_client::{FormFrameworkClient, FormFrameworkServices};
