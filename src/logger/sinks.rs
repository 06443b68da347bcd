//! Log sink implementations
//!
//! A [`LogSink`] is an object-style alternative to a bare handler closure.
//! [`install_sink`] plugs any sink into the global handler slot.
//!
//! - [`StdoutSink`]: one line per message on standard output
//! - [`FileSink`]: one line per message appended to a file
//! - [`TracingSink`]: forwards into the `tracing` subscriber
//! - [`MemorySink`]: keeps messages in memory, for tests

use super::format_line;
use crate::errors::{GreeterError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Destination for library log messages.
pub trait LogSink: Send + Sync {
    fn write(&self, message: &str, file: &str, line: u32);
}

/// Route the global handler slot to `sink`.
pub fn install_sink<S: LogSink + 'static>(sink: Arc<S>) {
    super::set_handler(move |message, file, line| sink.write(message, file, line));
}

/// Prints `[file:line] message` on standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write(&self, message: &str, file: &str, line: u32) {
        super::log_to_stdout(message, file, line);
    }
}

/// Appends `[file:line] message` lines to a file.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<LineWriter<File>>,
}

impl FileSink {
    /// Open (or create) `path` for appending.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                GreeterError::log_file(format!(
                    "Could not create log file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(Self {
            path,
            writer: Mutex::new(LineWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn write(&self, message: &str, file: &str, line: u32) {
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{}", format_line(message, file, line)) {
            warn!("Failed to write to log file {}: {}", self.path.display(), e);
        }
    }
}

/// Forwards messages to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, message: &str, file: &str, line: u32) {
        tracing::info!(target: "greeter", file, line, "{}", message);
    }
}

/// In-memory sink for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_message(&self) -> Option<String> {
        self.messages.lock().last().cloned()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn write(&self, message: &str, _file: &str, _line: u32) {
        self.messages.lock().push(message.to_string());
    }
}
