use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The `<format>` field of the `MThd` chunk.

Identifies how the tracks of the file relate to each other.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0: a single track holding every channel
    SingleMultiChannel = 0,
    /// Format 1: one or more tracks played simultaneously
    Simultaneous = 1,
    /// Format 2: one or more independent single-track patterns
    SequentiallyIndependent = 2,
}

#[test]
fn format_from_raw() {
    assert_eq!(FormatType::try_from(1u16).unwrap(), FormatType::Simultaneous);
    assert_eq!(u16::from(FormatType::SequentiallyIndependent), 2);
    assert!(FormatType::try_from(3u16).is_err());
}
