//! Named controller tables.
//!
//! Static, read-only lookup tables mapping controller numbers to their
//! conventional names: the 128 General MIDI Control Change numbers, the
//! 14-bit CC subrange (1-31), and the sparse well-known subsets of the RPN
//! and NRPN parameter spaces.
//!
//! Numbers without a conventional name map to an empty string; RPN/NRPN
//! numbers outside the named subsets are still valid controller numbers,
//! they just have no label.

use crate::controller::ControlType;

/// Name of a General MIDI Control Change number (0-127).
///
/// Returns an empty string for undefined or out-of-range numbers.
pub const fn controller_name(param: u16) -> &'static str {
    match param {
        0 => "Bank Select (coarse)",
        1 => "Modulation Wheel (coarse)",
        2 => "Breath Controller (coarse)",
        4 => "Foot Pedal (coarse)",
        5 => "Portamento Time (coarse)",
        6 => "Data Entry (coarse)",
        7 => "Volume (coarse)",
        8 => "Balance (coarse)",
        10 => "Pan Position (coarse)",
        11 => "Expression (coarse)",
        12 => "Effect Control 1 (coarse)",
        13 => "Effect Control 2 (coarse)",
        16 => "General Purpose Slider 1",
        17 => "General Purpose Slider 2",
        18 => "General Purpose Slider 3",
        19 => "General Purpose Slider 4",
        32 => "Bank Select (fine)",
        33 => "Modulation Wheel (fine)",
        34 => "Breath Controller (fine)",
        36 => "Foot Pedal (fine)",
        37 => "Portamento Time (fine)",
        38 => "Data Entry (fine)",
        39 => "Volume (fine)",
        40 => "Balance (fine)",
        42 => "Pan Position (fine)",
        43 => "Expression (fine)",
        44 => "Effect Control 1 (fine)",
        45 => "Effect Control 2 (fine)",
        64 => "Hold Pedal (on/off)",
        65 => "Portamento (on/off)",
        66 => "Sostenuto Pedal (on/off)",
        67 => "Soft Pedal (on/off)",
        68 => "Legato Pedal (on/off)",
        69 => "Hold 2 Pedal (on/off)",
        70 => "Sound Variation",
        71 => "Sound Timbre",
        72 => "Sound Release Time",
        73 => "Sound Attack Time",
        74 => "Sound Brightness",
        75 => "Sound Control 6",
        76 => "Sound Control 7",
        77 => "Sound Control 8",
        78 => "Sound Control 9",
        79 => "Sound Control 10",
        80 => "General Purpose Button 1 (on/off)",
        81 => "General Purpose Button 2 (on/off)",
        82 => "General Purpose Button 3 (on/off)",
        83 => "General Purpose Button 4 (on/off)",
        91 => "Effects Level",
        92 => "Tremolo Level",
        93 => "Chorus Level",
        94 => "Celeste Level",
        95 => "Phaser Level",
        96 => "Data Button Increment",
        97 => "Data Button Decrement",
        98 => "Non-Registered Parameter (fine)",
        99 => "Non-Registered Parameter (coarse)",
        100 => "Registered Parameter (fine)",
        101 => "Registered Parameter (coarse)",
        120 => "All Sound Off",
        121 => "All Controllers Off",
        122 => "Local Keyboard (on/off)",
        123 => "All Notes Off",
        124 => "Omni Mode Off",
        125 => "Omni Mode On",
        126 => "Mono Operation",
        127 => "Poly Operation",
        _ => "",
    }
}

/// Name of a 14-bit Control Change number (1-31).
///
/// Each number pairs a coarse CC with its fine CC 32 positions up, so the
/// names are the coarse controller names without the precision suffix.
pub const fn control14_name(param: u16) -> &'static str {
    match param {
        1 => "Modulation Wheel",
        2 => "Breath Controller",
        4 => "Foot Pedal",
        5 => "Portamento Time",
        6 => "Data Entry",
        7 => "Volume",
        8 => "Balance",
        10 => "Pan Position",
        11 => "Expression",
        12 => "Effect Control 1",
        13 => "Effect Control 2",
        16 => "General Purpose Slider 1",
        17 => "General Purpose Slider 2",
        18 => "General Purpose Slider 3",
        19 => "General Purpose Slider 4",
        _ => "",
    }
}

/// Well-known Registered Parameter Numbers, sorted by number.
pub const RPN_NAMES: &[(u16, &str)] = &[
    (0, "Pitch Bend Sensitivity"),
    (1, "Fine Tuning"),
    (2, "Coarse Tuning"),
    (3, "Tuning Program"),
    (4, "Tuning Bank"),
    (5, "Modulation Depth Range"),
];

/// Well-known Non-Registered Parameter Numbers (GS/XG subset), sorted by
/// number. NRPN numbers are the 14-bit combination `msb * 128 + lsb`.
pub const NRPN_NAMES: &[(u16, &str)] = &[
    (136, "Vibrato Rate"),
    (137, "Vibrato Depth"),
    (138, "Vibrato Delay"),
    (160, "Filter Cutoff"),
    (161, "Filter Resonance"),
    (227, "EG Attack Time"),
    (228, "EG Decay Time"),
    (230, "EG Release Time"),
];

/// Name a parameter number within a control type's number space.
///
/// Returns an empty string when the number has no conventional name.
pub fn param_name_for(control_type: ControlType, param: u16) -> &'static str {
    fn sparse(table: &[(u16, &'static str)], param: u16) -> &'static str {
        table
            .binary_search_by_key(&param, |&(n, _)| n)
            .map(|i| table[i].1)
            .unwrap_or("")
    }
    match control_type {
        ControlType::Cc => controller_name(param),
        ControlType::Cc14 => control14_name(param),
        ControlType::Rpn => sparse(RPN_NAMES, param),
        ControlType::Nrpn => sparse(NRPN_NAMES, param),
    }
}
