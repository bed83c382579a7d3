//! HistoryLog -- the last [`HISTORY_CAPACITY`] successful generations.
//!
//! Newest first. Every mutation is flushed to the store immediately; a failed
//! flush is logged and the in-memory list still changes.

use std::sync::Arc;

use chrono::Utc;
use tubeseo_types::content::{GeneratedContent, HISTORY_CAPACITY, HistoryItem, SessionState};
use uuid::Uuid;

use crate::storage::{HISTORY_KEY, KvStore, load_json, save_json};

pub struct HistoryLog<S: KvStore> {
    store: Arc<S>,
    items: Vec<HistoryItem>,
}

impl<S: KvStore> HistoryLog<S> {
    /// Read the persisted history. Errors yield an empty log.
    ///
    /// A list longer than the capacity is cut down to its newest entries.
    pub async fn load(store: Arc<S>) -> Self {
        let mut items = match load_json::<_, Vec<HistoryItem>>(store.as_ref(), HISTORY_KEY).await {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not restore history, starting empty");
                Vec::new()
            }
        };
        if items.len() > HISTORY_CAPACITY {
            tracing::debug!(stored = items.len(), "truncating persisted history");
            items.truncate(HISTORY_CAPACITY);
        }
        Self { store, items }
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Record a generation at the front, evicting the oldest beyond capacity.
    ///
    /// Returns the new list.
    pub async fn append(&mut self, topic: &str, content: &GeneratedContent) -> Vec<HistoryItem> {
        let item = HistoryItem {
            id: format!("hist-{}", Uuid::now_v7()),
            timestamp: Utc::now().timestamp_millis(),
            video_topic: topic.to_string(),
            content: content.clone(),
        };

        let mut next = Vec::with_capacity(HISTORY_CAPACITY);
        next.push(item);
        next.extend(self.items.iter().take(HISTORY_CAPACITY - 1).cloned());
        self.items = next;

        self.persist().await;
        self.items.clone()
    }

    /// Drop every entry. Returns the (empty) list.
    pub async fn clear(&mut self) -> Vec<HistoryItem> {
        self.items.clear();
        self.persist().await;
        self.items.clone()
    }

    async fn persist(&self) {
        if let Err(e) = save_json(self.store.as_ref(), HISTORY_KEY, &self.items).await {
            tracing::warn!(error = %e, "failed to persist history");
        }
    }
}

/// Session state that restores `item`.
pub fn select(item: &HistoryItem) -> SessionState {
    SessionState::new(item.video_topic.clone(), Some(item.content.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;
    use crate::test_support::sample_content;

    #[tokio::test]
    async fn test_append_puts_newest_first() {
        let mut log = HistoryLog::load(Arc::new(MemoryKvStore::new())).await;
        log.append("first", &sample_content("A")).await;
        let items = log.append("second", &sample_content("B")).await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].video_topic, "second");
        assert_eq!(items[1].video_topic, "first");
        assert!(items[0].id.starts_with("hist-"));
        assert_ne!(items[0].id, items[1].id);
        assert!(items[0].timestamp >= items[1].timestamp);
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest() {
        let mut log = HistoryLog::load(Arc::new(MemoryKvStore::new())).await;
        for i in 1..=10 {
            log.append(&format!("topic {i}"), &sample_content("t")).await;
        }
        assert_eq!(log.items().len(), 10);
        assert_eq!(log.items()[9].video_topic, "topic 1");

        let items = log.append("topic 11", &sample_content("t")).await;
        assert_eq!(items.len(), HISTORY_CAPACITY);
        assert_eq!(items[0].video_topic, "topic 11");
        assert_eq!(items[9].video_topic, "topic 2");
        assert!(items.iter().all(|item| item.video_topic != "topic 1"));
    }

    #[tokio::test]
    async fn test_history_survives_reload() {
        let store = Arc::new(MemoryKvStore::new());
        let mut log = HistoryLog::load(store.clone()).await;
        log.append("coffee", &sample_content("Coffee")).await;
        log.append("tea", &sample_content("Tea")).await;

        let reloaded = HistoryLog::load(store).await;
        assert_eq!(reloaded.items(), log.items());
    }

    #[tokio::test]
    async fn test_clear_then_reload_is_empty() {
        let store = Arc::new(MemoryKvStore::new());
        let mut log = HistoryLog::load(store.clone()).await;
        log.append("coffee", &sample_content("Coffee")).await;

        assert!(log.clear().await.is_empty());
        let reloaded = HistoryLog::load(store.clone()).await;
        assert!(reloaded.items().is_empty());
        assert_eq!(store.get(HISTORY_KEY).await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_load_truncates_oversized_list() {
        let store = Arc::new(MemoryKvStore::new());
        let items: Vec<HistoryItem> = (0..14)
            .map(|i| HistoryItem {
                id: format!("hist-{i}"),
                timestamp: 1_700_000_000_000 - i,
                video_topic: format!("topic {i}"),
                content: sample_content("t"),
            })
            .collect();
        save_json(store.as_ref(), HISTORY_KEY, &items).await.unwrap();

        let log = HistoryLog::load(store).await;
        assert_eq!(log.items().len(), HISTORY_CAPACITY);
        assert_eq!(log.items()[0].id, "hist-0");
        assert_eq!(log.items()[9].id, "hist-9");
    }

    #[tokio::test]
    async fn test_corrupt_history_loads_empty() {
        let store = Arc::new(MemoryKvStore::new());
        store.set(HISTORY_KEY, "not json at all").await.unwrap();
        let log = HistoryLog::load(store).await;
        assert!(log.items().is_empty());
    }

    #[tokio::test]
    async fn test_appended_snapshot_is_independent_copy() {
        let mut log = HistoryLog::load(Arc::new(MemoryKvStore::new())).await;
        let mut content = sample_content("Original");
        log.append("coffee", &content).await;

        content.title = "Edited later".to_string();
        assert_eq!(log.items()[0].content.title, "Original");
    }

    #[tokio::test]
    async fn test_get_and_select() {
        let mut log = HistoryLog::load(Arc::new(MemoryKvStore::new())).await;
        let items = log.append("coffee", &sample_content("Coffee")).await;
        let id = items[0].id.clone();

        let item = log.get(&id).unwrap();
        let state = select(item);
        assert_eq!(state.current_topic, "coffee");
        assert_eq!(state.current_content.unwrap().title, "Coffee");
        assert!(log.get("hist-missing").is_none());
    }
}
