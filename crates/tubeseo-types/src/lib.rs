//! Shared domain types for tubeseo.
//!
//! Generated content, history and session snapshots, thumbnail settings,
//! provider request/response shapes, configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror, base64.

pub mod config;
pub mod content;
pub mod error;
pub mod llm;
pub mod thumbnail;
