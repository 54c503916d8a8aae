//! MIDI controller-key types.
//!
//! A [`ControlKey`] identifies one MIDI control source: an addressing
//! scheme ([`ControlType`]), a channel (0-31) and a controller/parameter
//! number. Type and channel are packed into a single status word so that a
//! key can be compared and hashed cheaply, matching the wire-side encoding
//! used by synth engines (type nibble in the high byte, channel in the low
//! five bits).

/// Channel bits within a packed status word (channels 0-31).
pub const CHANNEL_MASK: u16 = 0x1f;

/// Type bits within a packed status word.
pub const TYPE_MASK: u16 = 0xf00;

/// Largest value representable by a 14-bit parameter number.
pub const PARAM_14BIT_MAX: u16 = 0x3fff;

// =============================================================================
// ControlType
// =============================================================================

/// MIDI controller addressing scheme.
///
/// Discriminants are the packed-status type nibbles, so a `ControlType`
/// can be OR-ed with a channel to form a [`ControlKey`] status word.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ControlType {
    /// 7-bit Control Change (controller numbers 0-127).
    #[default]
    Cc = 0x100,
    /// Registered Parameter Number (14-bit parameter space).
    Rpn = 0x200,
    /// Non-Registered Parameter Number (14-bit parameter space).
    Nrpn = 0x300,
    /// 14-bit Control Change, a coarse/fine CC pair (numbers 1-31).
    Cc14 = 0x400,
}

impl ControlType {
    /// All control types, in presentation order.
    pub const ALL: [ControlType; 4] = [
        ControlType::Cc,
        ControlType::Rpn,
        ControlType::Nrpn,
        ControlType::Cc14,
    ];

    /// Decode the type bits of a packed status word.
    ///
    /// Unknown type bits fall back to [`ControlType::Cc`].
    pub fn from_status(status: u16) -> Self {
        match status & TYPE_MASK {
            0x200 => ControlType::Rpn,
            0x300 => ControlType::Nrpn,
            0x400 => ControlType::Cc14,
            _ => ControlType::Cc,
        }
    }

    /// Look up a type by its presentation index.
    ///
    /// An out-of-range index falls back to [`ControlType::Cc`].
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Presentation index of this type within [`ControlType::ALL`].
    pub fn index(&self) -> usize {
        match self {
            ControlType::Cc => 0,
            ControlType::Rpn => 1,
            ControlType::Nrpn => 2,
            ControlType::Cc14 => 3,
        }
    }

    /// Display name of this type.
    pub const fn name(&self) -> &'static str {
        match self {
            ControlType::Cc => "CC",
            ControlType::Rpn => "RPN",
            ControlType::Nrpn => "NRPN",
            ControlType::Cc14 => "CC14",
        }
    }

    /// Whether the parameter number space of this type accepts free-form
    /// numeric entry.
    ///
    /// CC and CC14 are fixed enumerations; RPN and NRPN address an open
    /// 14-bit space of which only a handful of numbers have well-known
    /// names.
    pub const fn is_editable(&self) -> bool {
        matches!(self, ControlType::Rpn | ControlType::Nrpn)
    }

    /// Whether `param` is a valid parameter number for this type.
    pub const fn param_in_range(&self, param: u16) -> bool {
        match self {
            ControlType::Cc => param < 128,
            ControlType::Cc14 => param >= 1 && param < 32,
            ControlType::Rpn | ControlType::Nrpn => param <= PARAM_14BIT_MAX,
        }
    }

    /// Default parameter number for this type's domain.
    pub const fn default_param(&self) -> u16 {
        match self {
            ControlType::Cc14 => 1,
            _ => 0,
        }
    }
}

// =============================================================================
// ControlKey
// =============================================================================

/// One MIDI control source: packed type/channel status plus parameter
/// number.
///
/// Two keys are equal iff both the packed status and the parameter number
/// match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlKey {
    /// Type bits OR-ed with the channel (masked to 5 bits).
    pub status: u16,
    /// Controller/parameter number. Interpretation depends on the type.
    pub param: u16,
}

impl Default for ControlKey {
    /// CC, channel 0, controller 0.
    fn default() -> Self {
        Self::new(ControlType::Cc, 0, 0)
    }
}

impl ControlKey {
    /// Pack a new key from its parts. The channel is masked to 0-31.
    pub fn new(control_type: ControlType, channel: u16, param: u16) -> Self {
        Self {
            status: control_type as u16 | (channel & CHANNEL_MASK),
            param,
        }
    }

    /// The addressing scheme of this key.
    pub fn control_type(&self) -> ControlType {
        ControlType::from_status(self.status)
    }

    /// The channel (0-31) of this key.
    pub const fn channel(&self) -> u16 {
        self.status & CHANNEL_MASK
    }
}

impl std::fmt::Display for ControlKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (channel {})",
            self.control_type().name(),
            self.param,
            self.channel()
        )
    }
}
