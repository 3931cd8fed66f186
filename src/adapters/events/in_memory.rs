//! In-memory event bus.
//!
//! Captures every published envelope in order so tests and the replay binary
//! can inspect what the flow emitted.

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus.
///
/// Features:
/// - Synchronous, ordered capture (deterministic for tests)
/// - Query helpers for assertions
/// - Failure injection for error-path tests
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
///
/// assert_eq!(bus.event_count(), 1);
/// assert!(bus.has_event("onboarding.step_changed.v1"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
    fail_with: Option<String>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bus that rejects every publish with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            published: RwLock::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    // === Test Helpers ===

    /// Returns all published events in publish order.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    /// Returns count of published events.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_type == event_type)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if let Some(message) = &self.fail_with {
            return Err(DomainError::new(ErrorCode::EventPublishError, message.clone())
                .with_detail("event_type", event.event_type));
        }
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{
        EventId, OnboardingId, Percentage, SerializableDomainEvent, Timestamp,
    };
    use crate::domain::onboarding::StepChanged;

    fn envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        let mut envelope = StepChanged {
            event_id: EventId::new(),
            onboarding_id: OnboardingId::new(),
            from_step: 1,
            to_step: 2,
            completion_percentage: Percentage::new(10),
            changed_at: Timestamp::now(),
        }
        .to_envelope();
        envelope.event_type = event_type.to_string();
        envelope.aggregate_id = aggregate_id.to_string();
        envelope
    }

    #[tokio::test]
    async fn captures_events_in_order() {
        let bus = InMemoryEventBus::new();

        bus.publish(envelope("onboarding.step_changed.v1", "a")).await.unwrap();
        bus.publish(envelope("onboarding.completed.v1", "a")).await.unwrap();

        let types: Vec<String> = bus
            .published_events()
            .into_iter()
            .map(|e| e.event_type)
            .collect();
        assert_eq!(
            types,
            vec!["onboarding.step_changed.v1", "onboarding.completed.v1"]
        );
        assert!(bus.has_event("onboarding.completed.v1"));
    }

    #[tokio::test]
    async fn filters_by_type_and_aggregate() {
        let bus = InMemoryEventBus::new();
        bus.publish_all(vec![
            envelope("onboarding.step_changed.v1", "a"),
            envelope("onboarding.step_changed.v1", "b"),
            envelope("onboarding.profile_updated.v1", "a"),
        ])
        .await
        .unwrap();

        assert_eq!(bus.events_of_type("onboarding.step_changed.v1").len(), 2);
        assert_eq!(bus.events_for_aggregate("a").len(), 2);
    }

    #[tokio::test]
    async fn failing_bus_rejects_and_records_nothing() {
        let bus = InMemoryEventBus::failing("bus down");

        let err = bus
            .publish(envelope("onboarding.completed.v1", "a"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EventPublishError);
        assert_eq!(bus.event_count(), 0);
    }
}
