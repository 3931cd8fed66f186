//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecommendationProvider` - Asynchronous suggestion batches at checkpoint steps
//! - `ProfileSink` - Receives the completed profile
//! - `EventPublisher` - Publishes onboarding domain events

mod event_publisher;
mod profile_sink;
mod recommendation_provider;

pub use event_publisher::EventPublisher;
pub use profile_sink::ProfileSink;
pub use recommendation_provider::{
    RecommendationError, RecommendationProvider, RecommendationRequest,
};
