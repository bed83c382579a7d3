//! SessionController -- owns the current topic and content.
//!
//! Every state transition writes the whole `{currentTopic, currentContent}`
//! snapshot to the store. Storage failures are logged and swallowed: the
//! in-memory state stays authoritative for the rest of the process.

use std::sync::Arc;

use tubeseo_types::content::{GeneratedContent, SessionState};

use crate::storage::{KvStore, SESSION_STATE_KEY, load_json, save_json};

pub struct SessionController<S: KvStore> {
    store: Arc<S>,
    state: SessionState,
}

impl<S: KvStore> SessionController<S> {
    /// Read the persisted snapshot once.
    ///
    /// A missing, unreadable or corrupt snapshot yields the empty state.
    pub async fn load(store: Arc<S>) -> Self {
        let state = match load_json::<_, SessionState>(store.as_ref(), SESSION_STATE_KEY).await {
            Ok(Some(state)) => state,
            Ok(None) => SessionState::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not restore session state, starting empty");
                SessionState::default()
            }
        };
        Self { store, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn topic(&self) -> &str {
        &self.state.current_topic
    }

    pub fn content(&self) -> Option<&GeneratedContent> {
        self.state.current_content.as_ref()
    }

    pub async fn set_topic(&mut self, topic: impl Into<String>) {
        self.state.current_topic = topic.into();
        self.persist().await;
    }

    pub async fn set_content(&mut self, content: Option<GeneratedContent>) {
        self.state.current_content = content;
        self.persist().await;
    }

    /// Replace topic and content together with a single write.
    pub async fn replace(&mut self, state: SessionState) {
        self.state = state;
        self.persist().await;
    }

    /// Reset to an empty topic and no content.
    pub async fn clear_session(&mut self) {
        self.replace(SessionState::default()).await;
    }

    async fn persist(&self) {
        if let Err(e) = save_json(self.store.as_ref(), SESSION_STATE_KEY, &self.state).await {
            tracing::warn!(error = %e, "failed to persist session state");
        }
    }
}
