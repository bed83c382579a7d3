//! Storage port for the persisted session snapshot and history log.
//!
//! - `KvStore`: string key to JSON text, implemented by tubeseo-infra (SQLite)
//! - `MemoryKvStore`: in-process implementation for tests and ephemeral runs

pub mod kv_store;
pub mod memory;

pub use kv_store::{KvStore, load_json, save_json};
pub use memory::MemoryKvStore;

/// Key holding the `{currentTopic, currentContent}` snapshot.
pub const SESSION_STATE_KEY: &str = "yt-seo-app-state";

/// Key holding the JSON array of history items, most recent first.
pub const HISTORY_KEY: &str = "yt-seo-history";
