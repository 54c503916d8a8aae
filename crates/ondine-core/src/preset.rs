//! Preset capture, apply, and file I/O.
//!
//! A preset is a named snapshot of engine parameter values, keyed by
//! parameter name so that a file survives parameter reordering between
//! engine versions. Values for names the engine no longer knows are
//! skipped on apply; parameters the file does not mention keep their
//! current values.
//!
//! Session-managed preset files live at `<session path>/<display
//! name>.<product>`; see [`session_preset_path`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::SynthEngine;
use crate::error::Result;
use crate::types::ParamIndex;

/// One captured parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetValue {
    /// Parameter name as reported by the engine.
    pub name: String,
    /// Plain parameter value.
    pub value: f32,
}

/// A named snapshot of engine parameter values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Preset display name.
    pub name: String,
    /// Captured values, in engine parameter order.
    pub params: Vec<PresetValue>,
}

impl Preset {
    /// Snapshot every engine parameter into a new preset.
    pub fn capture<E: SynthEngine>(name: &str, engine: &mut E) -> Self {
        let count = engine.param_count();
        let mut params = Vec::with_capacity(count);
        for i in 0..count {
            let index = ParamIndex(i as u32);
            let param_name = engine.param_name(index).to_string();
            if let Some(value) = engine.param_value(index) {
                params.push(PresetValue {
                    name: param_name,
                    value,
                });
            }
        }
        Self {
            name: name.to_string(),
            params,
        }
    }

    /// Write this preset's values into the engine's parameter ports.
    ///
    /// Values are matched by parameter name; unknown names are skipped.
    pub fn apply<E: SynthEngine>(&self, engine: &mut E) {
        for value in &self.params {
            let index = (0..engine.param_count())
                .map(|i| ParamIndex(i as u32))
                .find(|&i| engine.param_name(i) == value.name);
            match index {
                Some(index) => engine.set_param(index, value.value),
                None => log::warn!("preset {:?}: unknown parameter {:?}", self.name, value.name),
            }
        }
    }
}

/// Load a preset file and apply it to the engine.
pub fn load_preset<E: SynthEngine>(path: &Path, engine: &mut E) -> Result<Preset> {
    let text = fs::read_to_string(path)?;
    let preset: Preset = serde_json::from_str(&text)?;
    preset.apply(engine);
    log::debug!("loaded preset {:?} from {}", preset.name, path.display());
    Ok(preset)
}

/// Capture the engine state and write it to a preset file.
///
/// The preset name is the file stem.
pub fn save_preset<E: SynthEngine>(path: &Path, engine: &mut E) -> Result<()> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let preset = Preset::capture(&name, engine);
    let text = serde_json::to_string_pretty(&preset)?;
    fs::write(path, text)?;
    log::debug!("saved preset {:?} to {}", preset.name, path.display());
    Ok(())
}

/// Build the session-managed preset file path:
/// `<session path>/<display name>.<product>`.
pub fn session_preset_path(session_path: &str, display_name: &str, product: &str) -> PathBuf {
    Path::new(session_path).join(format!("{display_name}.{product}"))
}
