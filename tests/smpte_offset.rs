mod common;

use common::*;
use pretty_assertions::assert_eq;
use smfreader::prelude::*;

/// Builds a single track file with SMPTE timing, 40 ticks per frame, whose
/// track opens with an SMPTE offset event
fn midi_with_smpte_offset(
    fps: SmpteFps,
    hour: u8,
    minute: u8,
    second: u8,
    frame: u8,
    subframe: u8,
) -> Vec<u8> {
    let (division_byte, rate_bits) = match fps {
        SmpteFps::TwentyFour => (0xE8, 0b00),
        SmpteFps::TwentyFive => (0xE7, 0b01),
        SmpteFps::TwentyNine => (0xE3, 0b10),
        SmpteFps::Thirty => (0xE2, 0b11),
    };
    let body = [
        0x00, 0xFF, 0x54, 0x05, // smpte offset
        (rate_bits << 5) | (hour & 0x1F),
        minute,
        second,
        frame,
        subframe,
        0x00, 0x90, 0x3C, 0x64, // note on
        0x60, 0x80, 0x3C, 0x40, // note off
        0x00, 0xFF, 0x2F, 0x00, // end of track
    ];
    smf(0, u16::from_be_bytes([division_byte, 40]), &[track(&body)])
}

fn first_offset(bytes: &[u8]) -> (FileHeader, SmpteOffset) {
    let mut midi = MidiFile::from_bytes(bytes).unwrap();
    let track = midi.track(0).unwrap();
    let offset = track
        .events()
        .first()
        .and_then(TrackEvent::as_meta)
        .expect("smpte offset event")
        .smpte_offset()
        .unwrap();
    (*midi.header(), offset)
}

#[test]
fn smpte_offset_24fps() {
    let bytes = midi_with_smpte_offset(SmpteFps::TwentyFour, 12, 30, 15, 18, 50);
    let (header, offset) = first_offset(&bytes);

    let Timing::Smpte(smpte) = header.timing() else {
        panic!("Expected SMPTE timing");
    };
    assert_eq!(smpte.fps(), SmpteFps::TwentyFour);
    assert_eq!(smpte.ticks_per_frame(), 40);
    assert_eq!(header.pulses_per_quarter_note(), 960);

    assert_eq!(offset.fps, SmpteFps::TwentyFour);
    assert_eq!(
        (offset.hour, offset.minute, offset.second, offset.frame, offset.subframe),
        (12, 30, 15, 18, 50)
    );
    let expected = (12 * 3600 + 30 * 60 + 15) as f64 * 1_000_000.0
        + (18.0 / 24.0) * 1_000_000.0
        + (50.0 / 100.0 / 24.0) * 1_000_000.0;
    assert!((offset.as_micros() - expected).abs() < 0.01);
}

#[test]
fn smpte_offset_29_97_drop_frame() {
    let bytes = midi_with_smpte_offset(SmpteFps::TwentyNine, 23, 59, 59, 28, 99);
    let (header, offset) = first_offset(&bytes);

    // drop frame counts as 30 in the division
    assert_eq!(header.pulses_per_quarter_note(), 1200);
    assert_eq!(offset.fps, SmpteFps::TwentyNine);

    let expected = 86_399_000_000.0 + (28.0 * 1_000_000.0 / 29.97) + (99.0 * 10_000.0 / 29.97);
    assert!((offset.as_micros() - expected).abs() < 1.0);
}

#[test]
fn smpte_offset_25_and_30fps() {
    let bytes = midi_with_smpte_offset(SmpteFps::TwentyFive, 0, 0, 1, 12, 75);
    let (header, offset) = first_offset(&bytes);
    assert_eq!(header.pulses_per_quarter_note(), 1000);
    assert_eq!(offset.fps, SmpteFps::TwentyFive);
    assert_eq!((offset.second, offset.frame, offset.subframe), (1, 12, 75));

    let bytes = midi_with_smpte_offset(SmpteFps::Thirty, 1, 0, 0, 0, 0);
    let (header, offset) = first_offset(&bytes);
    assert_eq!(header.pulses_per_quarter_note(), 1200);
    assert_eq!(offset.as_micros(), 3_600_000_000.0);
}

#[test]
fn smpte_offset_with_override_fps() {
    let bytes = midi_with_smpte_offset(SmpteFps::TwentyFour, 10, 20, 30, 12, 50);
    let (header, offset) = first_offset(&bytes);
    let Timing::Smpte(smpte) = header.timing() else {
        panic!("Expected SMPTE timing");
    };

    let original = offset.as_micros();
    assert!((original - offset.as_micros_with_override(smpte.fps())).abs() < 0.01);
    assert!((original - offset.as_micros_with_override(SmpteFps::Thirty)).abs() > 1.0);
}

#[test]
fn multiple_tracks_with_different_offsets() {
    let first = [
        0x00, 0xFF, 0x54, 0x05, 0x20, 0x00, 0x0A, 0x00, 0x00, // 00:00:10:00
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let second = [
        0x00, 0xFF, 0x54, 0x05, 0x20, 0x01, 0x00, 0x00, 0x00, // 00:01:00:00
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let bytes = smf(1, 0xE728, &[track(&first), track(&second)]);
    let mut midi = MidiFile::from_bytes(&bytes).unwrap();

    let offsets: Vec<SmpteOffset> = midi
        .tracks()
        .map(|track| track.unwrap())
        .flat_map(|track| track.into_events())
        .filter_map(|event| event.as_meta().and_then(|m| m.smpte_offset().ok()))
        .collect();

    assert_eq!(offsets.len(), 2);
    assert_eq!((offsets[0].minute, offsets[0].second), (0, 10));
    assert_eq!((offsets[1].minute, offsets[1].second), (1, 0));

    let diff = offsets[1].as_micros() - offsets[0].as_micros();
    assert!((diff - 50_000_000.0).abs() < 1.0);
}

#[test]
fn smpte_offset_with_bad_length_fails_on_request_only() {
    let body = [
        0x00, 0xFF, 0x54, 0x04, 0x20, 0x00, 0x00, 0x00, // four bytes only
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let bytes = smf(0, 0x0060, &[track(&body)]);
    let mut midi = MidiFile::from_bytes(&bytes).unwrap();

    // the track itself decodes, the payload is only checked when read
    let track = midi.track(0).unwrap();
    let meta = track.events()[0].as_meta().unwrap();
    assert_eq!(meta.kind(), MetaType::SmpteOffset);
    assert_eq!(
        meta.smpte_offset().unwrap_err(),
        ParseError::Smpte(SmpteError::Length(4))
    );
}
