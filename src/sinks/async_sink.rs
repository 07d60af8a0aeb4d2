//! Asynchronous sink wrapper

use crate::core::Sink;
use crossbeam_channel::{bounded, Sender, TrySendError};
use std::sync::Arc;
use std::thread;

/// Wraps another sink behind a bounded channel and a worker thread.
///
/// `write_line` forwards the line and returns immediately; the caller never
/// awaits completion or backpressure. Lines offered while the buffer is full
/// are dropped. Dropping the sink closes the channel, drains pending lines,
/// and joins the worker.
pub struct AsyncSink {
    sender: Option<Sender<String>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl AsyncSink {
    pub fn new(inner: Arc<dyn Sink>, buffer_size: usize) -> Self {
        let (sender, receiver) = bounded::<String>(buffer_size);

        let handle = thread::spawn(move || {
            while let Ok(line) = receiver.recv() {
                inner.write_line(&line);
            }
            // Channel closed: everything queued has been written
            inner.flush();
        });

        Self {
            sender: Some(sender),
            handle: Some(handle),
        }
    }
}

impl Sink for AsyncSink {
    fn write_line(&self, line: &str) {
        if let Some(ref sender) = self.sender {
            match sender.try_send(line.to_string()) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    // Buffer full: fire-and-forget means the line is lost
                }
                Err(TrySendError::Disconnected(_)) => {
                    // Worker gone, shutting down
                }
            }
        }
    }

    fn name(&self) -> &str {
        "async"
    }
}

impl Drop for AsyncSink {
    fn drop(&mut self) {
        // Close the channel so the worker drains and exits
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    #[test]
    fn test_delivers_all_lines_before_drop_completes() {
        let memory = Arc::new(MemorySink::new());
        {
            let sink = AsyncSink::new(Arc::clone(&memory) as Arc<dyn Sink>, 64);
            for i in 0..10 {
                sink.write_line(&format!("line {}", i));
            }
        }
        // drop joined the worker, so every queued line was written
        let lines = memory.lines();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "line 0");
        assert_eq!(lines[9], "line 9");
    }

    #[test]
    fn test_write_after_worker_alive_is_nonblocking() {
        let memory = Arc::new(MemorySink::new());
        let sink = AsyncSink::new(Arc::clone(&memory) as Arc<dyn Sink>, 4);
        sink.write_line("hello");
        drop(sink);
        assert_eq!(memory.lines(), vec!["hello"]);
    }
}
