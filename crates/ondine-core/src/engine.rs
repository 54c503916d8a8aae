//! The consumed synth-engine surface.

use crate::types::ParamIndex;

/// Trait for the externally-owned synth engine.
///
/// Ondine never owns the DSP core; it drives an engine through this seam.
/// The engine exposes its client lifecycle (open/close against the audio
/// backend, activate/deactivate of the processing graph) and direct access
/// to its parameter storage.
pub trait SynthEngine {
    /// Open the engine under the given backend client name.
    fn open(&mut self, client_id: &str);

    /// Close the engine's backend client.
    fn close(&mut self);

    /// Start audio processing.
    fn activate(&mut self);

    /// Stop audio processing.
    fn deactivate(&mut self);

    /// Number of parameters the engine exposes.
    fn param_count(&self) -> usize;

    /// Display name of a parameter.
    ///
    /// Returns an empty string for an out-of-range index.
    fn param_name(&self, index: ParamIndex) -> &str;

    /// The engine-owned value cell of a parameter.
    ///
    /// Returns `None` for an out-of-range index.
    fn param_port(&mut self, index: ParamIndex) -> Option<&mut f32>;

    /// Write a parameter value directly into its port.
    ///
    /// Out-of-range indices are ignored.
    fn set_param(&mut self, index: ParamIndex, value: f32) {
        if let Some(port) = self.param_port(index) {
            *port = value;
        }
    }

    /// Read a parameter value from its port.
    fn param_value(&mut self, index: ParamIndex) -> Option<f32> {
        self.param_port(index).map(|port| *port)
    }
}
