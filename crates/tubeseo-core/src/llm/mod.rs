//! Generative provider abstractions.
//!
//! - `GenerativeProvider`: RPITIT trait for concrete provider implementations
//! - `BoxGenerativeProvider`: object-safe wrapper for dynamic dispatch

pub mod box_provider;
pub mod provider;
