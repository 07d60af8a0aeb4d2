//! Sink implementations

pub mod async_sink;
pub mod console;
pub mod file;
pub mod memory;

pub use async_sink::AsyncSink;
pub use console::{StderrSink, StdoutSink};
pub use file::FileSink;
pub use memory::MemorySink;
