//! Profile sink adapters.

mod in_memory_sink;
mod logging_sink;

pub use in_memory_sink::InMemoryProfileSink;
pub use logging_sink::LoggingProfileSink;
