use super::chunk::TrackChunkHeader;
use crate::reader::{ReadResult, Reader};
use std::io::{Read, Seek};

/// Moves the cursor to the chunk header of track `index`.
///
/// Starting from `track_base`, the offset of the first track chunk, each
/// preceding `MTrk` chunk is skipped using only its declared length. None
/// of their events are decoded.
pub(crate) fn seek_track<R: Read + Seek>(
    reader: &mut Reader<R>,
    track_base: u64,
    index: usize,
) -> ReadResult<()> {
    reader.seek_to(track_base)?;
    for _ in 0..index {
        let header = TrackChunkHeader::read(reader)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            declared_length = header.declared_length(),
            "skipping track chunk"
        );
        reader.skip(u64::from(header.declared_length()))?;
    }
    Ok(())
}
