//! API credential lookup.

pub mod env;

pub use env::{ApiKey, resolve_api_key};
