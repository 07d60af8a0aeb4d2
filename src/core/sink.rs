//! Sink trait for log output destinations
//!
//! A sink accepts rendered lines and completes synchronously or
//! asynchronously. Writes are fire-and-forget: implementations append the
//! trailing newline themselves and swallow isolated write errors so logging
//! can never be the cause of a caller's failure.

pub trait Sink: Send + Sync {
    /// Write one rendered line, appending a trailing newline.
    fn write_line(&self, line: &str);

    /// Flush any buffered output.
    fn flush(&self) {}

    fn name(&self) -> &str;
}
