use thiserror::Error;

#[doc = r#"
The set of format errors that can occur while decoding a MIDI file.

Every variant here means the input is not a well-formed Standard MIDI File.
Decoding stops at the first one; nothing is recovered.
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A chunk header was invalid
    #[error("Chunk: {0}")]
    Chunk(#[from] ChunkError),
    /// The `MThd` header contents were invalid
    #[error("Header: {0}")]
    Header(#[from] HeaderError),
    /// SMPTE timing was invalid
    #[error("Smpte: {0}")]
    Smpte(#[from] SmpteError),
    /// The events of a track did not match its declared length
    #[error("Track: {0}")]
    Track(#[from] TrackError),
    /// A single event could not be decoded
    #[error("Event: {0}")]
    Event(#[from] EventError),
    /// A meta event payload had an unexpected shape
    #[error("Meta: {0}")]
    Meta(#[from] MetaError),
}

/// Errors for chunk framing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// The four byte tag was not the one expected at this position
    #[error("Expected chunk {expected:?}, found {found:?}")]
    InvalidMagic {
        /// The expected tag
        expected: [u8; 4],
        /// The tag that was read
        found: [u8; 4],
    },
}

/// Errors in the contents of the `MThd` chunk
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// The declared header length is too small to hold format, tracks and division
    #[error("Header length {0} is shorter than 6 bytes")]
    Length(u32),
    /// The format field was not 0, 1 or 2
    #[error("Invalid format type {0}")]
    InvalidFormat(u16),
    /// The division resolves to zero pulses per quarter note
    #[error("Division {0:#06X} yields zero pulses per quarter note")]
    ZeroDivision(u16),
}

/// Errors for SMPTE time values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SmpteError {
    /// The frames-per-second byte of the division is not -24, -25, -29 or -30
    #[error("Invalid frames per second in header: {0}")]
    HeaderFrameTime(i8),
    /// The frame rate bits of an SMPTE offset event were invalid
    #[error("Invalid frame rate type in SMPTE offset: {0}")]
    TrackFrame(u8),
    /// An SMPTE offset payload was not five bytes long
    #[error("SMPTE offset must be 5 bytes, got {0}")]
    Length(usize),
    /// Hours above 23
    #[error("Invalid hour offset: {0}")]
    HourOffset(u8),
    /// Minutes above 59
    #[error("Invalid minute offset: {0}")]
    MinuteOffset(u8),
    /// Seconds above 59
    #[error("Invalid second offset: {0}")]
    SecondOffset(u8),
    /// Subframes above 99
    #[error("Invalid subframe: {0}")]
    Subframe(u8),
}

/// Errors relating a track's events to its declared chunk length
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// An event tried to read past the end of the track chunk
    #[error("Event overruns the declared track length of {declared} bytes")]
    Overrun {
        /// The length declared by the `MTrk` header
        declared: u32,
    },
}

/// Errors decoding a single event
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The delta time used four bytes and still had the continuation bit set
    #[error("Variable length quantity longer than 4 bytes")]
    VlqOverflow,
    /// A data byte appeared where a status byte was required
    #[error("Data byte {0:#04X} with no running status")]
    NoRunningStatus(u8),
    /// A system status byte that cannot appear in a track chunk
    #[error("Unsupported status byte {0:#04X}")]
    UnsupportedStatus(u8),
}

/// Errors reading the structured fields of a meta event
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetaError {
    /// The payload length does not fit the meta type
    #[error("Meta type {meta_type:#04X} expects {expected} bytes, got {found}")]
    Length {
        /// The meta type byte
        meta_type: u8,
        /// Required payload length
        expected: usize,
        /// Actual payload length
        found: usize,
    },
    /// The meta type was not the one being read
    #[error("Expected meta type {expected:#04X}, found {found:#04X}")]
    WrongType {
        /// Meta type the reader handles
        expected: u8,
        /// Meta type of the event
        found: u8,
    },
}
