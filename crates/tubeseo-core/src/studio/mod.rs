//! Studio -- the orchestrator behind every user-facing action.
//!
//! Owns the generation client, the session controller, the history log and
//! one [`OperationSlot`] per kind of generation. Each action catches its own
//! error and records it in its slot, so a failing thumbnail never disturbs
//! the primary content or the alternative titles.
//!
//! Session and history sit behind an async mutex (single logical writer).
//! Slots sit behind a synchronous mutex that is never held across an await.

pub mod slot;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tubeseo_types::content::{AlternativeTitle, GeneratedContent, HistoryItem, SessionState};
use tubeseo_types::error::GenerationError;
use tubeseo_types::thumbnail::{ThumbnailImage, ThumbnailOptions, ThumbnailRequest};

use crate::generation::GenerationClient;
use crate::generation::client::{MISSING_TITLE_MESSAGE, MISSING_TOPIC_MESSAGE};
use crate::history::{self, HistoryLog};
use crate::session::SessionController;
use crate::storage::KvStore;

pub use slot::{OperationSlot, SlotSnapshot, SlotStatus, Ticket};

#[derive(Debug, Default)]
struct Slots {
    primary: OperationSlot<GeneratedContent>,
    alternatives: OperationSlot<Vec<AlternativeTitle>>,
    thumbnail: OperationSlot<ThumbnailImage>,
}

struct Persisted<S: KvStore> {
    session: SessionController<S>,
    history: HistoryLog<S>,
}

/// Everything a presentation layer needs to render the current screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudioSnapshot {
    pub session: SessionState,
    pub primary: SlotSnapshot<GeneratedContent>,
    pub alternatives: SlotSnapshot<Vec<AlternativeTitle>>,
    pub thumbnail: SlotSnapshot<ThumbnailImage>,
}

pub struct Studio<S: KvStore> {
    client: GenerationClient,
    persisted: tokio::sync::Mutex<Persisted<S>>,
    slots: Mutex<Slots>,
}

impl<S: KvStore> Studio<S> {
    /// Restore session and history from `store`.
    pub async fn open(client: GenerationClient, store: Arc<S>) -> Self {
        let session = SessionController::load(store.clone()).await;
        let history = HistoryLog::load(store).await;
        tracing::debug!(
            topic = %session.topic(),
            has_content = session.content().is_some(),
            history = history.items().len(),
            "studio restored"
        );
        Self {
            client,
            persisted: tokio::sync::Mutex::new(Persisted { session, history }),
            slots: Mutex::new(Slots::default()),
        }
    }

    pub fn client(&self) -> &GenerationClient {
        &self.client
    }

    fn slots(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Generate primary content for `topic`.
    ///
    /// Sets the topic, clears the current content and both follow-up slots,
    /// then on success stores the content and records it in history.
    pub async fn generate(
        &self,
        topic: &str,
        custom_instruction: Option<&str>,
    ) -> Result<GeneratedContent, GenerationError> {
        if topic.trim().is_empty() {
            return Err(self.slots().primary.reject(GenerationError::InvalidInput(
                MISSING_TOPIC_MESSAGE.to_string(),
            )));
        }

        let ticket = {
            let mut slots = self.slots();
            slots.alternatives.reset();
            slots.thumbnail.reset();
            slots.primary.begin()
        };
        self.persisted
            .lock()
            .await
            .session
            .replace(SessionState::new(topic, None))
            .await;

        let outcome = self
            .client
            .generate_primary_content(topic, custom_instruction)
            .await;

        let mut persisted = self.persisted.lock().await;
        let content = self.slots().primary.finish(ticket, outcome)?;
        persisted.session.set_content(Some(content.clone())).await;
        persisted.history.append(topic, &content).await;
        Ok(content)
    }

    /// Generate alternatives to the current title.
    pub async fn generate_alternatives(&self) -> Result<Vec<AlternativeTitle>, GenerationError> {
        let (topic, title) = {
            let persisted = self.persisted.lock().await;
            (
                persisted.session.topic().to_string(),
                persisted.session.content().map(|c| c.title.clone()),
            )
        };

        let ticket = self.slots().alternatives.begin();
        let outcome = match title {
            Some(title) if !topic.trim().is_empty() => {
                self.client
                    .generate_alternative_titles(&topic, &title)
                    .await
            }
            Some(_) => Err(GenerationError::InvalidInput(MISSING_TOPIC_MESSAGE.to_string())),
            None => Err(GenerationError::InvalidInput(MISSING_TITLE_MESSAGE.to_string())),
        };

        self.slots().alternatives.finish(ticket, outcome)
    }

    /// Generate a thumbnail for the current topic.
    pub async fn generate_thumbnail(
        &self,
        options: ThumbnailOptions,
    ) -> Result<ThumbnailImage, GenerationError> {
        let topic = self.persisted.lock().await.session.topic().to_string();
        let request = ThumbnailRequest::new(topic, options);

        let ticket = self.slots().thumbnail.begin();
        let outcome = self.client.generate_thumbnail(&request).await;
        self.slots().thumbnail.finish(ticket, outcome)
    }

    /// Edit the current topic without generating.
    pub async fn set_topic(&self, topic: &str) {
        self.persisted.lock().await.session.set_topic(topic).await;
    }

    /// Clear topic, content and every slot. In-flight results are discarded.
    pub async fn clear_all(&self) {
        let mut persisted = self.persisted.lock().await;
        {
            let mut slots = self.slots();
            slots.primary.reset();
            slots.alternatives.reset();
            slots.thumbnail.reset();
        }
        persisted.session.clear_session().await;
    }

    /// Restore topic and content from the history entry `id`.
    pub async fn select_history(&self, id: &str) -> Result<SessionState, GenerationError> {
        let mut persisted = self.persisted.lock().await;
        let state = persisted
            .history
            .get(id)
            .map(history::select)
            .ok_or_else(|| {
                GenerationError::InvalidInput(format!("No history entry with id '{id}'."))
            })?;

        {
            let mut slots = self.slots();
            slots.primary.reset();
            slots.alternatives.reset();
            slots.thumbnail.reset();
        }
        persisted.session.replace(state.clone()).await;
        Ok(state)
    }

    pub async fn clear_history(&self) -> Vec<HistoryItem> {
        self.persisted.lock().await.history.clear().await
    }

    pub async fn history(&self) -> Vec<HistoryItem> {
        self.persisted.lock().await.history.items().to_vec()
    }

    pub async fn snapshot(&self) -> StudioSnapshot {
        let session = self.persisted.lock().await.session.state().clone();
        let slots = self.slots();
        StudioSnapshot {
            session,
            primary: slots.primary.snapshot(),
            alternatives: slots.alternatives.snapshot(),
            thumbnail: slots.thumbnail.snapshot(),
        }
    }
}
