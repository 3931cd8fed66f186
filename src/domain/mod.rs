//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, events)
//! - `profile` - The learner profile, its groups and patch types
//! - `onboarding` - Step flow, heuristics and the pure reducer

pub mod foundation;
pub mod onboarding;
pub mod profile;
