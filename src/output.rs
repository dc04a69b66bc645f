//! In-memory response body
//!
//! A page is rendered into a [`ResponseBuffer`] before anything reaches the
//! client, so a rendering error can still turn into an error page. Like a
//! servlet response, the body is written either as raw bytes or as text,
//! never both.

use std::fmt;
use std::io;

use thiserror::Error;

/// How the body of a response is being written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// Raw bytes through [`ResponseBuffer::output_stream`]
    Stream,
    /// Text through [`ResponseBuffer::writer`]
    Writer,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Stream => f.write_str("output stream"),
            SinkKind::Writer => f.write_str("writer"),
        }
    }
}

/// Errors from claiming a response sink
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutputError {
    #[error("cannot open the response {requested}: the {claimed} is already in use")]
    AlreadyClaimed {
        requested: SinkKind,
        claimed: SinkKind,
    },
}

/// A response body collected in memory
#[derive(Debug, Default)]
pub struct ResponseBuffer {
    body: Vec<u8>,
    claimed: Option<SinkKind>,
    content_type: Option<String>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn claim(&mut self, requested: SinkKind) -> Result<(), OutputError> {
        match self.claimed {
            Some(claimed) if claimed != requested => {
                Err(OutputError::AlreadyClaimed { requested, claimed })
            }
            _ => {
                self.claimed = Some(requested);
                Ok(())
            }
        }
    }

    /// The byte sink; fails once the text writer has been handed out
    pub fn output_stream(&mut self) -> Result<BodyStream<'_>, OutputError> {
        self.claim(SinkKind::Stream)?;
        Ok(BodyStream { body: &mut self.body })
    }

    /// The text sink; fails once the byte stream has been handed out
    pub fn writer(&mut self) -> Result<BodyWriter<'_>, OutputError> {
        self.claim(SinkKind::Writer)?;
        Ok(BodyWriter { body: &mut self.body })
    }

    /// Which sink has been handed out, if any
    pub fn claimed(&self) -> Option<SinkKind> {
        self.claimed
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.content_type = Some(content_type.into());
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Buffered content is kept until the buffer is consumed
    pub fn reset_buffer(&mut self) {}

    /// Number of bytes buffered so far
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Alias for [`len`](Self::len), the size the buffer has grown to
    pub fn buffer_size(&self) -> usize {
        self.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    /// The body as text, replacing invalid UTF-8
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Byte sink over a [`ResponseBuffer`]
#[derive(Debug)]
pub struct BodyStream<'a> {
    body: &'a mut Vec<u8>,
}

impl io::Write for BodyStream<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Text sink over a [`ResponseBuffer`]
///
/// Accepts formatted text as well as the byte writes the page decorations
/// produce.
#[derive(Debug)]
pub struct BodyWriter<'a> {
    body: &'a mut Vec<u8>,
}

impl fmt::Write for BodyWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.body.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

impl io::Write for BodyWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
