use super::{
    FormatType, Timing,
    chunk::{ChunkHeader, HEADER_MAGIC},
};
use crate::{
    HeaderError,
    reader::{ReadResult, Reader, ReaderError},
};
use std::io::{Read, Seek};

/// Bytes of `<format>`, `<tracks>` and `<division>`
const HEADER_FIELDS_LEN: u32 = 6;

#[doc = r#"
The decoded `MThd` chunk.

```text
+----------+-----------------+----------+----------+------------+
| MThd     | <length>        | <format> | <tracks> | <division> |
| 4 bytes  | u32             | u16      | u16      | u16        |
+----------+-----------------+----------+----------+------------+
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileHeader {
    format: FormatType,
    track_count: u16,
    timing: Timing,
    declared_length: u32,
}

impl FileHeader {
    /// Decodes the header chunk at the cursor.
    ///
    /// Leaves the cursor just past the chunk, honoring the declared length
    /// even when it is longer than the six bytes this crate understands.
    pub(crate) fn read<R: Read + Seek>(reader: &mut Reader<R>) -> ReadResult<Self> {
        let chunk = ChunkHeader::read(reader, HEADER_MAGIC)?;
        let declared_length = chunk.length();
        if declared_length < HEADER_FIELDS_LEN {
            return Err(reader.invalid(HeaderError::Length(declared_length)));
        }

        let format_pos = reader.buffer_position();
        let raw_format = reader.read_u16()?;
        let format = FormatType::try_from(raw_format).map_err(|_| {
            ReaderError::invalid(format_pos, HeaderError::InvalidFormat(raw_format))
        })?;
        let track_count = reader.read_u16()?;

        let division_pos = reader.buffer_position();
        let division = reader.read_u16()?;
        let timing =
            Timing::from_division(division).map_err(|e| ReaderError::invalid(division_pos, e))?;

        if declared_length != HEADER_FIELDS_LEN {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                declared_length,
                "header chunk is longer than 6 bytes, skipping the extra fields"
            );
            reader.skip(u64::from(declared_length - HEADER_FIELDS_LEN))?;
        }

        Ok(Self {
            format,
            track_count,
            timing,
            declared_length,
        })
    }

    /// The format of the file
    pub const fn format(&self) -> FormatType {
        self.format
    }

    /// The number of track chunks the header declares
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// Get the timing props
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }

    /// The file's time resolution. Always greater than zero.
    pub const fn pulses_per_quarter_note(&self) -> u16 {
        self.timing.pulses_per_quarter_note()
    }

    /// The length the `MThd` chunk declared for itself
    pub const fn declared_length(&self) -> u32 {
        self.declared_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChunkError, ParseError, SmpteError, prelude::SmpteFps};
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_metrical_header() {
        let bytes = [
            0x4D, 0x54, 0x68, 0x64, 0x00, 0x00, 0x00, 0x06, 0x00, 0x01, 0x00, 0x02, 0x01, 0xE0,
        ];
        let mut reader = Reader::from_byte_slice(&bytes);
        let header = FileHeader::read(&mut reader).unwrap();
        assert_eq!(header.format(), FormatType::Simultaneous);
        assert_eq!(header.track_count(), 2);
        assert_eq!(header.pulses_per_quarter_note(), 480);
        assert_eq!(reader.buffer_position(), 14);
    }

    #[test]
    fn decodes_smpte_header() {
        let bytes = *b"MThd\x00\x00\x00\x06\x00\x00\x00\x01\xE7\x28";
        let mut reader = Reader::from_byte_slice(&bytes);
        let header = FileHeader::read(&mut reader).unwrap();
        assert_eq!(header.format(), FormatType::SingleMultiChannel);
        assert_eq!(header.timing(), &Timing::new_smpte(SmpteFps::TwentyFive, 40));
        assert_eq!(header.pulses_per_quarter_note(), 1000);
    }

    #[test]
    fn skips_extension_fields() {
        let bytes = *b"MThd\x00\x00\x00\x08\x00\x00\x00\x01\x00\x60\xAA\xBBMTrk";
        let mut reader = Reader::from_byte_slice(&bytes);
        let header = FileHeader::read(&mut reader).unwrap();
        assert_eq!(header.declared_length(), 8);
        assert_eq!(header.pulses_per_quarter_note(), 96);
        assert_eq!(reader.buffer_position(), 16);
    }

    #[test]
    fn rejects_bad_magic() {
        let bytes = *b"RIFF\x00\x00\x00\x06\x00\x00\x00\x01\x00\x60";
        let mut reader = Reader::from_byte_slice(&bytes);
        let err = FileHeader::read(&mut reader).unwrap_err();
        assert!(matches!(
            err.parse_error(),
            Some(ParseError::Chunk(ChunkError::InvalidMagic { .. }))
        ));
    }

    #[test]
    fn rejects_unknown_format() {
        let bytes = *b"MThd\x00\x00\x00\x06\x00\x03\x00\x01\x00\x60";
        let mut reader = Reader::from_byte_slice(&bytes);
        let err = FileHeader::read(&mut reader).unwrap_err();
        assert_eq!(
            err.parse_error(),
            Some(&ParseError::Header(HeaderError::InvalidFormat(3)))
        );
        assert_eq!(err.position(), 8);
    }

    #[test]
    fn rejects_short_length() {
        let bytes = *b"MThd\x00\x00\x00\x04\x00\x00\x00\x01";
        let mut reader = Reader::from_byte_slice(&bytes);
        let err = FileHeader::read(&mut reader).unwrap_err();
        assert_eq!(
            err.parse_error(),
            Some(&ParseError::Header(HeaderError::Length(4)))
        );
    }

    #[test]
    fn rejects_unknown_frame_rate() {
        let bytes = *b"MThd\x00\x00\x00\x06\x00\x00\x00\x01\xE1\x28";
        let mut reader = Reader::from_byte_slice(&bytes);
        let err = FileHeader::read(&mut reader).unwrap_err();
        assert_eq!(
            err.parse_error(),
            Some(&ParseError::Smpte(SmpteError::HeaderFrameTime(-31)))
        );
        assert_eq!(err.position(), 12);
    }

    #[test]
    fn zero_resolution_never_reaches_a_header() {
        for division in [b"\x00\x00", b"\xE8\x00"] {
            let mut bytes = b"MThd\x00\x00\x00\x06\x00\x01\x00\x01".to_vec();
            bytes.extend_from_slice(division);
            let mut reader = Reader::from_byte_slice(&bytes);
            let err = FileHeader::read(&mut reader).unwrap_err();
            assert!(matches!(
                err.parse_error(),
                Some(ParseError::Header(HeaderError::ZeroDivision(_)))
            ));
            assert_eq!(err.position(), 12);
        }
    }
}
