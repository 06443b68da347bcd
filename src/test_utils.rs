//! Helpers shared by unit tests.

use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// In-memory writer for capturing subscriber output.
#[derive(Debug, Clone, Default)]
pub struct CapturedWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedWriter {
    /// A `MakeWriter` handing out clones that share this buffer.
    pub fn writer_fn(&self) -> impl Fn() -> CapturedWriter + Send + Sync + 'static {
        let writer = self.clone();
        move || writer.clone()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }
}

impl io::Write for CapturedWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
