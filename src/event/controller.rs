use num_enum::{FromPrimitive, IntoPrimitive};

/// Controller numbers carried by a [`Command::ControlChange`](super::Command::ControlChange).
///
/// Numbers 0x20 through 0x2D are the fine (LSB) counterparts of 0x00
/// through 0x0D and, with every other unnamed number, land in
/// [`Controller::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Controller {
    // coarse
    BankSelect = 0x00,
    ModulationWheel = 0x01,
    Breath = 0x02,
    FootPedal = 0x04,
    PortamentoTime = 0x05,
    DataEntry = 0x06,
    Volume = 0x07,
    Balance = 0x08,
    Pan = 0x0A,
    Expression = 0x0B,
    Effect1 = 0x0C,
    Effect2 = 0x0D,
    General1 = 0x10,
    General2 = 0x11,
    General3 = 0x12,
    General4 = 0x13,

    // pedals
    HoldPedal = 0x40,
    Portamento = 0x41,
    SostenutoPedal = 0x42,
    SoftPedal = 0x43,
    LegatoPedal = 0x44,
    Hold2Pedal = 0x45,

    // sound
    SoundVariation = 0x46,
    SoundTimbre = 0x47,
    SoundReleaseTime = 0x48,
    SoundAttackTime = 0x49,
    SoundBrightness = 0x4A,
    SoundControl6 = 0x4B,
    SoundControl7 = 0x4C,
    SoundControl8 = 0x4D,
    SoundControl9 = 0x4E,
    SoundControl10 = 0x4F,

    // buttons
    GeneralButton1 = 0x50,
    GeneralButton2 = 0x51,
    GeneralButton3 = 0x52,
    GeneralButton4 = 0x53,

    // levels
    EffectsLevel = 0x5B,
    TremoloLevel = 0x5C,
    ChorusLevel = 0x5D,
    CelesteLevel = 0x5E,
    PhaserLevel = 0x5F,

    DataIncrement = 0x60,
    DataDecrement = 0x61,
    NonRegisteredParameterFine = 0x62,
    NonRegisteredParameterCoarse = 0x63,
    RegisteredParameterFine = 0x64,
    RegisteredParameterCoarse = 0x65,

    // channel mode
    AllSoundOff = 0x78,
    AllControllersOff = 0x79,
    LocalKeyboard = 0x7A,
    AllNotesOff = 0x7B,
    OmniModeOff = 0x7C,
    OmniModeOn = 0x7D,
    MonoOperation = 0x7E,
    PolyOperation = 0x7F,

    /// Any controller number without a name
    #[num_enum(catch_all)]
    Other(u8),
}

impl Controller {
    /// True for the channel mode messages, 0x78 and above
    pub fn is_channel_mode(&self) -> bool {
        u8::from(*self) >= 0x78
    }
}

#[test]
fn controller_numbers() {
    assert_eq!(Controller::from(0x40), Controller::HoldPedal);
    assert_eq!(Controller::from(0x27), Controller::Other(0x27));
    assert_eq!(u8::from(Controller::Other(0x27)), 0x27);
    assert!(Controller::AllNotesOff.is_channel_mode());
    assert!(!Controller::Volume.is_channel_mode());
}
