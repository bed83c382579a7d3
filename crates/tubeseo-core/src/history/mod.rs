//! Bounded, persisted, most-recent-first history of generations.

pub mod log;

pub use log::{HistoryLog, select};
