//! Line-oriented domain input.
//!
//! Lines are read as raw bytes and decoded lossily, so a line that is not
//! valid UTF-8 still becomes a domain (which then fails to resolve) instead
//! of ending the run. Only I/O errors and over-long lines are errors.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::config::MAX_LINE_BYTES;

/// Reads one domain per line from an async buffered reader.
pub struct DomainLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> DomainLines<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Returns the next line with its `\n` or `\r\n` terminator removed, or
    /// `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns the reader's I/O error, or `InvalidData` when a line is longer
    /// than [`MAX_LINE_BYTES`].
    pub async fn next_domain(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        // Room for a full-length line plus "\r\n"
        let limit = (MAX_LINE_BYTES + 2) as u64;
        let read = (&mut self.reader)
            .take(limit)
            .read_until(b'\n', &mut self.buf)
            .await?;
        if read == 0 {
            return Ok(None);
        }

        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        if self.buf.len() > MAX_LINE_BYTES {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line longer than {MAX_LINE_BYTES} bytes"),
            ));
        }

        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}
