//! In-memory `KvStore`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tubeseo_types::error::PersistenceError;

use super::kv_store::KvStore;

/// `KvStore` backed by a `HashMap`. Nothing survives the process.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// a controller wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail with `PersistenceError::Write`.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Write("store is read-only".to_string()));
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, PersistenceError> {
        self.entries
            .lock()
            .map_err(|_| PersistenceError::Read("memory store lock poisoned".to_string()))
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.check_writable()?;
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
