//! # Ondine
//!
//! MIDI controller mapping and session-managed hosting for software
//! synths.
//!
//! Ondine models the control surface of a synth host without binding to
//! any GUI toolkit: the controller-to-parameter mapping table, the
//! single-slot mapping editor, preset persistence, and the NSM session
//! protocol around them.
//!
//! ## Architecture
//!
//! ```text
//! Your front end (renders state, forwards gestures)
//!        ↓
//! ControlEditor / ControlMap / SessionShell
//!        ↓
//! SynthEngine + NsmClient (your engine, your OSC transport)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ondine::prelude::*;
//!
//! let mut map = ControlMap::new();
//! let mut editor = ControlEditor::new();
//!
//! editor.open(ParamIndex(5), "CUTOFF", Some(&map));
//! editor.set_type(ControlType::Cc);
//! editor.select_param(74);
//! editor.commit(Some(&mut map), &mut prompt);
//! ```

// Re-export sub-crates
pub use ondine_core as core;

#[cfg(feature = "nsm")]
pub use ondine_nsm as nsm;

/// Prelude module for convenient imports.
///
/// Import everything you need to wire up a host:
/// ```rust,ignore
/// use ondine::prelude::*;
/// ```
pub mod prelude {
    // Controller addressing
    pub use ondine_core::{ControlKey, ControlType, CHANNEL_MASK, PARAM_14BIT_MAX};
    // Mapping table
    pub use ondine_core::ControlMap;
    // Mapping editor
    pub use ondine_core::{
        CloseChoice, CloseOutcome, CommitOutcome, ControlEditor, EditSession, EditorPrompt,
        ReplaceChoice,
    };
    // Parameter-number domains
    pub use ondine_core::{ParamDomain, ParamItem};
    // Engine seam and presets
    pub use ondine_core::{
        load_preset, save_preset, session_preset_path, ParamIndex, Preset, PresetError,
        PresetValue, SynthEngine,
    };

    // Session management (only when feature enabled)
    #[cfg(feature = "nsm")]
    pub use ondine_nsm::{ClosePrompt, NsmClient, SessionShell, ShellConfig, CAPABILITIES};
}
