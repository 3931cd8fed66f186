//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the onboarding domain.

mod errors;
mod events;
mod ids;
mod onboarding_status;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::OnboardingId;
pub use onboarding_status::OnboardingStatus;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
