//! Infrastructure layer for tubeseo.
//!
//! Contains implementations of the ports defined in `tubeseo-core`: the Gemini
//! REST provider, the SQLite key-value store, plus configuration loading,
//! data directory resolution and API key lookup.

pub mod config;
pub mod filesystem;
pub mod llm;
pub mod secret;
pub mod sqlite;
