use pretty_assertions::assert_eq;
use smfreader::prelude::*;

/// Raw payload of an `FF 54 05` event
fn smpte_bytes(rate_bits: u8, hour: u8, minute: u8, second: u8, frame: u8, subframe: u8) -> [u8; 5] {
    [(rate_bits << 5) | (hour & 0x1F), minute, second, frame, subframe]
}

#[test]
fn payload_must_be_five_bytes() {
    for len in [0, 3, 4, 6] {
        let data = vec![0; len];
        assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::Length(len)));
    }
}

#[test]
fn rate_bits_above_three_are_rejected() {
    for bits in [4, 5, 7] {
        let data = smpte_bytes(bits, 12, 30, 15, 10, 50);
        assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::TrackFrame(bits)));
    }
}

#[test]
fn out_of_range_fields() {
    assert_eq!(
        SmpteOffset::parse(&[0x18, 0, 0, 0, 0]),
        Err(SmpteError::HourOffset(24))
    );
    assert_eq!(
        SmpteOffset::parse(&[0x1F, 0, 0, 0, 0]),
        Err(SmpteError::HourOffset(31))
    );
    for minute in [60, 99, 255] {
        assert_eq!(
            SmpteOffset::parse(&smpte_bytes(0, 12, minute, 30, 15, 50)),
            Err(SmpteError::MinuteOffset(minute))
        );
    }
    assert_eq!(
        SmpteOffset::parse(&smpte_bytes(1, 12, 30, 60, 15, 50)),
        Err(SmpteError::SecondOffset(60))
    );
    for subframe in [100, 150, 255] {
        assert_eq!(
            SmpteOffset::parse(&smpte_bytes(2, 12, 30, 45, 15, subframe)),
            Err(SmpteError::Subframe(subframe))
        );
    }
}

#[test]
fn first_bad_field_wins() {
    assert_eq!(
        SmpteOffset::parse(&smpte_bytes(0, 25, 61, 30, 15, 50)),
        Err(SmpteError::HourOffset(25))
    );
    assert_eq!(
        SmpteOffset::parse(&smpte_bytes(1, 23, 60, 60, 15, 50)),
        Err(SmpteError::MinuteOffset(60))
    );
}

#[test]
fn boundary_values_parse() {
    let cases = [
        (0, 0, 0, 0, 0, 0),
        (0, 23, 59, 59, 23, 99),
        (1, 23, 59, 59, 24, 99),
        (2, 23, 59, 59, 29, 99),
        (3, 23, 59, 59, 29, 99),
    ];
    for (bits, hour, minute, second, frame, subframe) in cases {
        let offset = SmpteOffset::parse(&smpte_bytes(bits, hour, minute, second, frame, subframe))
            .unwrap_or_else(|e| panic!("rate bits {bits}: {e}"));
        assert_eq!(
            (offset.hour, offset.minute, offset.second, offset.frame, offset.subframe),
            (hour, minute, second, frame, subframe)
        );
    }
}

#[test]
fn rate_bits_do_not_leak_into_hours() {
    let rates = [
        SmpteFps::TwentyFour,
        SmpteFps::TwentyFive,
        SmpteFps::TwentyNine,
        SmpteFps::Thirty,
    ];
    for (bits, fps) in rates.into_iter().enumerate() {
        for hour in 0..=23 {
            let offset = SmpteOffset::parse(&smpte_bytes(bits as u8, hour, 30, 45, 15, 50)).unwrap();
            assert_eq!(offset.fps, fps);
            assert_eq!(offset.hour, hour);
        }
    }
}

#[test]
fn frame_rate_override() {
    // one hour and twelve frames, stored at 24 fps
    let offset = SmpteOffset::parse(&smpte_bytes(0, 1, 0, 0, 12, 0)).unwrap();
    let hour = 3_600_000_000.0;

    for (fps, rate) in [
        (SmpteFps::TwentyFour, 24.0),
        (SmpteFps::TwentyFive, 25.0),
        (SmpteFps::TwentyNine, 29.97),
        (SmpteFps::Thirty, 30.0),
    ] {
        let micros = offset.as_micros_with_override(fps);
        assert!((micros - (hour + 12.0 / rate * 1_000_000.0)).abs() < 1.0);
    }
    assert_eq!(
        offset.as_micros(),
        offset.as_micros_with_override(SmpteFps::TwentyFour)
    );
}

#[test]
fn drop_frame_precision() {
    let offset = SmpteOffset::parse(&smpte_bytes(2, 0, 0, 0, 1, 0)).unwrap();
    // one frame lasts 1001/30000 seconds
    assert!((offset.as_micros() - 1_001_000.0 / 30.0).abs() < 0.001);

    let midnight = SmpteOffset::parse(&smpte_bytes(1, 0, 0, 0, 0, 0)).unwrap();
    assert_eq!(midnight.as_micros(), 0.0);
}

#[test]
fn wrong_meta_type_is_rejected() {
    let tempo = MetaEvent::new(0x51, vec![0x07, 0xA1, 0x20]);
    assert_eq!(
        tempo.smpte_offset().unwrap_err(),
        ParseError::Meta(MetaError::WrongType {
            expected: 0x54,
            found: 0x51
        })
    );
}
