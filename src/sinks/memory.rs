//! In-memory capturing sink

use crate::core::Sink;
use parking_lot::Mutex;

/// Sink that captures written lines in memory.
///
/// Used as a test double and for embedding scenarios where output is
/// inspected programmatically rather than streamed.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured lines, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Everything written so far, newline-terminated like a real stream.
    pub fn contents(&self) -> String {
        self.lines
            .lock()
            .iter()
            .map(|l| format!("{}\n", l))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_lines() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write_line("one");
        sink.write_line("two");
        assert_eq!(sink.lines(), vec!["one", "two"]);
        assert_eq!(sink.contents(), "one\ntwo\n");

        sink.clear();
        assert!(sink.is_empty());
    }
}
