//! OperationSlot -- loading flag, error message and latest value of one
//! kind of generation, guarded by a monotonic generation token.
//!
//! `begin` hands out a [`Ticket`]. Only the holder of the newest ticket may
//! settle the slot; anything older is reported as
//! [`GenerationError::Superseded`] and leaves the slot untouched.

use serde::Serialize;
use tubeseo_types::error::GenerationError;

/// Proof of which request started an in-flight operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct OperationSlot<T> {
    generation: u64,
    loading: bool,
    error: Option<String>,
    value: Option<T>,
}

impl<T> Default for OperationSlot<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            loading: false,
            error: None,
            value: None,
        }
    }
}

impl<T: Clone> OperationSlot<T> {
    /// Start a request. Clears the previous value and error and invalidates
    /// any ticket handed out before.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.value = None;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Settle the slot with the outcome of the request behind `ticket`.
    ///
    /// Returns the outcome unchanged, or `Superseded` when the ticket is stale.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        outcome: Result<T, GenerationError>,
    ) -> Result<T, GenerationError> {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale generation result"
            );
            return Err(GenerationError::Superseded);
        }

        self.loading = false;
        match &outcome {
            Ok(value) => {
                self.error = None;
                self.value = Some(value.clone());
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        outcome
    }

    /// Record a validation failure without starting a request.
    ///
    /// The ticket of an in-flight request stays valid and the loading flag
    /// is left as is, so that request can still settle the slot.
    pub fn reject(&mut self, error: GenerationError) -> GenerationError {
        self.error = Some(error.to_string());
        error
    }

    /// Return to idle and invalidate whatever is in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.error = None;
        self.value = None;
    }

    pub fn status(&self) -> SlotStatus {
        if self.is_loading() {
            SlotStatus::InFlight
        } else if self.error().is_some() {
            SlotStatus::Failed
        } else if self.value().is_some() {
            SlotStatus::Succeeded
        } else {
            SlotStatus::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Point-in-time copy for rendering.
    pub fn snapshot(&self) -> SlotSnapshot<T> {
        SlotSnapshot {
            status: self.status(),
            error: self.error().map(str::to_string),
            value: self.value().cloned(),
        }
    }
}

/// Serializable view of an [`OperationSlot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotSnapshot<T> {
    pub status: SlotStatus,
    pub error: Option<String>,
    pub value: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_success() {
        let mut slot: OperationSlot<u32> = OperationSlot::default();
        assert_eq!(slot.status(), SlotStatus::Idle);

        let ticket = slot.begin();
        assert_eq!(slot.status(), SlotStatus::InFlight);
        assert!(slot.is_loading());

        assert_eq!(slot.finish(ticket, Ok(7)), Ok(7));
        assert_eq!(slot.status(), SlotStatus::Succeeded);
        assert_eq!(slot.value(), Some(&7));
    }

    #[test]
    fn test_lifecycle_failure_keeps_message() {
        let mut slot: OperationSlot<u32> = OperationSlot::default();
        let ticket = slot.begin();
        let err = GenerationError::NoImageReturned;
        assert_eq!(slot.finish(ticket, Err(err.clone())), Err(err.clone()));
        assert_eq!(slot.status(), SlotStatus::Failed);
        assert_eq!(slot.error(), Some(err.to_string().as_str()));
    }

    #[test]
    fn test_retry_clears_previous_error() {
        let mut slot: OperationSlot<u32> = OperationSlot::default();
        let ticket = slot.begin();
        let _ = slot.finish(ticket, Err(GenerationError::NoImageReturned));

        slot.begin();
        assert!(slot.error().is_none());
        assert_eq!(slot.status(), SlotStatus::InFlight);
    }

    #[test]
    fn test_stale_ticket_is_superseded() {
        let mut slot: OperationSlot<&str> = OperationSlot::default();
        let first = slot.begin();
        let second = slot.begin();

        assert_eq!(slot.finish(second, Ok("new")), Ok("new"));
        assert_eq!(
            slot.finish(first, Ok("old")),
            Err(GenerationError::Superseded)
        );
        assert_eq!(slot.value(), Some(&"new"));
    }

    #[test]
    fn test_reject_keeps_in_flight_ticket() {
        let mut slot: OperationSlot<u32> = OperationSlot::default();
        let ticket = slot.begin();

        let err = GenerationError::InvalidInput("empty".to_string());
        assert_eq!(slot.reject(err.clone()), err);
        assert_eq!(slot.error(), Some("empty"));
        assert!(slot.is_loading());

        assert_eq!(slot.finish(ticket, Ok(3)), Ok(3));
        assert_eq!(slot.status(), SlotStatus::Succeeded);
        assert!(slot.error().is_none());
    }

    #[test]
    fn test_reject_on_idle_slot_fails_it() {
        let mut slot: OperationSlot<u32> = OperationSlot::default();
        slot.reject(GenerationError::InvalidInput("empty".to_string()));
        assert_eq!(slot.status(), SlotStatus::Failed);
    }

    #[test]
    fn test_reset_invalidates_in_flight() {
        let mut slot: OperationSlot<u32> = OperationSlot::default();
        let ticket = slot.begin();
        slot.reset();

        assert_eq!(slot.status(), SlotStatus::Idle);
        assert_eq!(slot.finish(ticket, Ok(1)), Err(GenerationError::Superseded));
        assert_eq!(slot.status(), SlotStatus::Idle);
    }
}
