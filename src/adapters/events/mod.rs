//! Event adapters - Implementations of event ports.

mod in_memory;

pub use in_memory::InMemoryEventBus;
