//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - In-memory event bus
//! - `recommendation` - Simulated and static recommendation providers
//! - `sink` - Logging and in-memory profile sinks

pub mod events;
pub mod recommendation;
pub mod sink;

pub use events::InMemoryEventBus;
pub use recommendation::{
    SimulatedRecommendationProvider, StaticRecommendationProvider, DEFAULT_SIMULATED_DELAY,
};
pub use sink::{InMemoryProfileSink, LoggingProfileSink};
