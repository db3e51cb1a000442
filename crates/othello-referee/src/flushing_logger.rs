//! Log writer that flushes after each message so the debug log survives an
//! abrupt end of the session.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// A writer that flushes the wrapped sink after each write operation.
pub struct FlushingWriter<W: Write> {
    inner: W,
}

impl<W: Write> FlushingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl FlushingWriter<File> {
    /// Create (truncate) the log file at `path`.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        File::create(path).map(Self::new)
    }
}

impl<W: Write> Write for FlushingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.inner.write(buf)?;
        self.inner.flush()?;
        Ok(result)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
