use crate::{ChunkError, ParseError};
use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

#[doc = r#"
A set of errors that can occur while reading a MIDI file into its in-memory representation
"#]
#[derive(Debug, Error)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: u64,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Error)]
pub enum ReaderErrorKind {
    /// The underlying source failed to open, read or seek
    #[error("I/O {0}")]
    Io(#[from] io::Error),
    /// Seeking past the end of the source
    #[error("Read out of bounds!")]
    OutOfBounds,
    /// The bytes are not a well-formed MIDI file
    #[error("Parsing {0}")]
    ParseError(#[from] ParseError),
    /// Storage for an event or track could not be allocated
    #[error("Allocation {0}")]
    Resource(#[from] TryReserveError),
}

impl ReaderErrorKind {
    pub(crate) const fn chunk(chunk_err: ChunkError) -> Self {
        Self::ParseError(ParseError::Chunk(chunk_err))
    }
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: u64, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }
    /// True for failures at the OS boundary, including seeking out of bounds
    pub const fn is_io(&self) -> bool {
        matches!(
            self.kind,
            ReaderErrorKind::Io(_) | ReaderErrorKind::OutOfBounds
        )
    }
    /// True if out of bounds
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::OutOfBounds)
    }
    /// True if the input is not a well-formed MIDI file
    pub const fn is_format(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::ParseError(_))
    }
    /// True if an allocation failed
    pub const fn is_resource(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::Resource(_))
    }
    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }
    /// Returns the parse error, if this is a format error
    pub fn parse_error(&self) -> Option<&ParseError> {
        match &self.kind {
            ReaderErrorKind::ParseError(e) => Some(e),
            _ => None,
        }
    }
    /// Returns the byte offset in the source where the error occurred.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Create a new invalid data error
    pub fn invalid(position: u64, error: impl Into<ParseError>) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::ParseError(error.into()),
        }
    }

    /// Create a new out of bounds error
    pub const fn oob(position: u64) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::OutOfBounds,
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;
