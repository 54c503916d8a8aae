//! Core model of the ondine MIDI-learn surface.
//!
//! This crate is deliberately toolkit-free. It holds:
//!
//! - the MIDI controller address space ([`controller`], [`names`]):
//!   CC, 14-bit CC pairs, RPN and NRPN, packed into [`ControlKey`]s;
//! - the shared controller-to-parameter table ([`map`]);
//! - the single-slot mapping editor ([`editor`]) with its prompt seam;
//! - preset capture and restore over a [`SynthEngine`] ([`preset`]).
//!
//! A front end renders whatever state these types expose and forwards
//! user gestures back in; session managers sit on top via the
//! `ondine-nsm` crate.

pub mod controller;
pub mod domain;
pub mod editor;
pub mod engine;
pub mod error;
pub mod map;
pub mod names;
pub mod preset;
pub mod types;

pub use controller::{ControlKey, ControlType, CHANNEL_MASK, PARAM_14BIT_MAX, TYPE_MASK};
pub use domain::{ParamDomain, ParamItem};
pub use editor::{
    CloseChoice, CloseOutcome, CommitOutcome, ControlEditor, EditSession, EditorPrompt,
    ReplaceChoice,
};
pub use engine::SynthEngine;
pub use error::{PresetError, Result};
pub use map::ControlMap;
pub use preset::{load_preset, save_preset, session_preset_path, Preset, PresetValue};
pub use types::ParamIndex;
