//! Recommendation provider adapters.

mod simulated_provider;
mod static_provider;

pub use simulated_provider::{SimulatedRecommendationProvider, DEFAULT_SIMULATED_DELAY};
pub use static_provider::StaticRecommendationProvider;
