//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Append-mode buffered file sink.
///
/// Creation fails with a configuration error when the path cannot be opened
/// writable; after that, individual write errors are swallowed like any
/// other sink.
#[derive(Debug)]
pub struct FileSink {
    path: String,
    writer: Mutex<BufWriter<std::fs::File>>,
}

impl FileSink {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::config(
                    "FileSink",
                    format!("cannot open '{}' for writing: {}", path.display(), e),
                )
            })?;

        Ok(Self {
            path: path.display().to_string(),
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", line);
    }

    fn flush(&self) {
        let _ = self.writer.lock().flush();
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.writer.lock().flush();
    }
}
