//! The controller-to-parameter mapping table.

use std::collections::HashMap;

use crate::controller::ControlKey;
use crate::types::ParamIndex;

/// Mapping from MIDI control sources to synth parameters.
///
/// The table is keyed by [`ControlKey`], so the forward lookup is O(1)
/// while the reverse lookup ([`find_param`](Self::find_param)) scans the
/// whole table. Engines own one of these; the mapping editor mutates it
/// only on commit.
///
/// The editor enforces that a key is bound to at most one parameter; the
/// table itself only guarantees that one key has one binding (inserting
/// over an existing key replaces it).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlMap {
    map: HashMap<ControlKey, ParamIndex>,
}

impl ControlMap {
    /// Create an empty mapping table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The parameter bound to `key`, if any.
    pub fn find_control(&self, key: &ControlKey) -> Option<ParamIndex> {
        self.map.get(key).copied()
    }

    /// The key bound to `index`, if any. Scans the full table.
    pub fn find_param(&self, index: ParamIndex) -> Option<ControlKey> {
        self.map
            .iter()
            .find(|&(_, &bound)| bound == index)
            .map(|(&key, _)| key)
    }

    /// Bind `key` to `index`, replacing any previous binding of `key`.
    pub fn add_control(&mut self, key: ControlKey, index: ParamIndex) {
        self.map.insert(key, index);
    }

    /// Remove the binding of `key`. Returns the parameter it was bound to.
    pub fn remove_control(&mut self, key: &ControlKey) -> Option<ParamIndex> {
        self.map.remove(key)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no bindings.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&ControlKey, &ParamIndex)> {
        self.map.iter()
    }

    /// Remove all bindings.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
