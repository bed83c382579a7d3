//! SQLite storage: split reader/writer pool and the `KvStore` adapter.

pub mod kv;
pub mod pool;
