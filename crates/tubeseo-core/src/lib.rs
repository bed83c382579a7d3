//! Business logic and port definitions for tubeseo.
//!
//! This crate defines the "ports" (provider and storage traits) that the
//! infrastructure layer implements. It depends only on `tubeseo-types` --
//! never on `tubeseo-infra` or any network/database crate.

pub mod generation;
pub mod history;
pub mod llm;
pub mod session;
pub mod storage;
pub mod studio;

#[cfg(test)]
pub(crate) mod test_support;
