#![allow(dead_code)]

/// Builds an `MThd` chunk
pub fn header(format: u16, tracks: u16, division: u16) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"MThd");
    bytes.extend_from_slice(&6u32.to_be_bytes());
    bytes.extend_from_slice(&format.to_be_bytes());
    bytes.extend_from_slice(&tracks.to_be_bytes());
    bytes.extend_from_slice(&division.to_be_bytes());
    bytes
}

/// Builds an `MTrk` chunk whose declared length matches its body
pub fn track(body: &[u8]) -> Vec<u8> {
    track_with_length(body.len() as u32, body)
}

/// Builds an `MTrk` chunk with an arbitrary declared length
pub fn track_with_length(declared: u32, body: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"MTrk");
    bytes.extend_from_slice(&declared.to_be_bytes());
    bytes.extend_from_slice(body);
    bytes
}

/// A complete file from a header and already built track chunks
pub fn smf(format: u16, division: u16, tracks: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = header(format, tracks.len() as u16, division);
    for track in tracks {
        bytes.extend_from_slice(track);
    }
    bytes
}

/// A conductor track: tempo 120 bpm, 4/4, C major, end of track
pub const CONDUCTOR: &[u8] = &[
    0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20, // tempo
    0x00, 0xFF, 0x58, 0x04, 0x04, 0x02, 0x18, 0x08, // time signature
    0x00, 0xFF, 0x59, 0x02, 0x00, 0x00, // key signature
    0x00, 0xFF, 0x2F, 0x00, // end of track
];

/// A melody using running status on channel 0
pub const MELODY: &[u8] = &[
    0x00, 0xFF, 0x03, 0x05, b'P', b'i', b'a', b'n', b'o', // track name
    0x00, 0xC0, 0x00, // program change
    0x00, 0x90, 0x3C, 0x64, // note on C4
    0x83, 0x60, 0x3C, 0x00, // 480 ticks later, note off by velocity 0
    0x00, 0x3E, 0x64, // note on D4
    0x83, 0x60, 0x3E, 0x00, // note off
    0x00, 0xFF, 0x2F, 0x00, // end of track
];

/// A bass line on channel 1 with a pitch bend
pub const BASS: &[u8] = &[
    0x00, 0x91, 0x24, 0x50, // note on C2
    0x81, 0x70, 0xE1, 0x00, 0x50, // pitch bend
    0x81, 0x70, 0x81, 0x24, 0x40, // note off
    0x00, 0xFF, 0x2F, 0x00, // end of track
];
