//! The controller-key mapping editor.
//!
//! [`ControlEditor`] owns at most one live [`EditSession`]: a transient
//! edit over the binding of one synth parameter to one MIDI control
//! source. Opening a new session silently replaces any prior one
//! (last-opened wins); the shared [`ControlMap`] is touched only when a
//! session commits.
//!
//! User-facing confirmations (replace an existing binding, apply or throw
//! away pending changes) go through the [`EditorPrompt`] seam so the
//! editor stays toolkit-neutral and tests can script the answers.

use crate::controller::{ControlKey, ControlType, CHANNEL_MASK};
use crate::domain::{parse_param, ParamDomain};
use crate::map::ControlMap;
use crate::types::ParamIndex;

// =============================================================================
// Prompt seam
// =============================================================================

/// Answer to the "controller already assigned" confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceChoice {
    /// Overwrite the existing binding.
    Replace,
    /// Abort the commit; the table stays untouched.
    Cancel,
}

/// Answer to the "settings have been changed" confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseChoice {
    /// Commit the pending changes, then close.
    Apply,
    /// Close without committing.
    Discard,
    /// Abort the close; the session stays open.
    Cancel,
}

/// User-facing confirmation seam for the mapping editor.
pub trait EditorPrompt {
    /// The committed key is already bound to a different parameter; may
    /// the editor replace that binding?
    fn confirm_replace(&mut self, target_name: &str, key: &ControlKey) -> ReplaceChoice;

    /// The session has pending changes and is about to close; apply,
    /// discard, or keep editing?
    fn confirm_close(&mut self, target_name: &str) -> CloseChoice;
}

// =============================================================================
// Outcomes
// =============================================================================

/// Result of a commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The binding was written to the table and the session closed.
    Committed,
    /// The user declined to replace a conflicting binding; the session
    /// stays open and the table is untouched.
    Cancelled,
    /// No session or no table is bound; nothing changed.
    Unbound,
}

/// Result of a close attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The session closed without committing.
    Closed,
    /// Pending changes were committed, then the session closed.
    Applied,
    /// The close was aborted; the session stays open.
    Kept,
}

// =============================================================================
// EditSession
// =============================================================================

/// Transient state of one mapping edit.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// The parameter being bound, fixed at open.
    target: ParamIndex,
    /// Display name of the target parameter, for prompts.
    target_name: String,
    /// Working channel (0-31).
    channel: u16,
    /// Working parameter-number domain for the current control type.
    domain: ParamDomain,
    /// Nonzero once any field changed since open or the last commit.
    dirty: u32,
    /// Nonzero while the session reprograms its own fields; suppresses
    /// the dirty mark.
    setup: u32,
    /// Reentrancy guard around free-text finalization.
    text_guard: u32,
}

impl EditSession {
    /// The parameter this session binds.
    pub fn target(&self) -> ParamIndex {
        self.target
    }

    /// Display name of the target parameter.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Working control type.
    pub fn control_type(&self) -> ControlType {
        self.domain.control_type()
    }

    /// Working channel.
    pub fn channel(&self) -> u16 {
        self.channel
    }

    /// The parameter-number domain for the working control type.
    pub fn domain(&self) -> &ParamDomain {
        &self.domain
    }

    /// Whether any field changed since open or the last commit.
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// The working key assembled from the current type, channel and
    /// parameter number.
    pub fn control_key(&self) -> ControlKey {
        ControlKey::new(self.domain.control_type(), self.channel, self.domain.current_value())
    }

    fn changed(&mut self) {
        if self.setup > 0 {
            return;
        }
        self.dirty += 1;
    }

    /// Rebuild the domain for `control_type`, carrying over the previous
    /// selection index when still in range and, between editable domains,
    /// the previous free text.
    fn update_type(&mut self, control_type: ControlType) {
        let old_editable = self.domain.is_editable();
        let old_index = self.domain.selected_index();
        let old_text = self.domain.edit_text().map(str::to_string);

        let mut domain = ParamDomain::for_type(control_type);
        if old_index < domain.len() {
            domain.select_index(old_index);
        }
        if domain.is_editable() && old_editable {
            if let Some(text) = old_text {
                domain.set_edit_text(&text);
            }
        }
        self.domain = domain;
    }
}

// =============================================================================
// ControlEditor
// =============================================================================

/// Owner of the single live [`EditSession`].
///
/// All mutating operations are no-ops while no session is open.
#[derive(Debug, Default)]
pub struct ControlEditor {
    session: Option<EditSession>,
}

impl ControlEditor {
    /// Create an editor with no open session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an edit session for `target`, replacing any prior session
    /// without prompting.
    ///
    /// The working key is seeded from the reverse lookup of `target` in
    /// the table, or CC/channel 0/controller 0 when unbound (or when no
    /// table is given). The new session starts clean.
    pub fn open(&mut self, target: ParamIndex, target_name: &str, map: Option<&ControlMap>) {
        if let Some(prior) = self.session.take() {
            log::debug!(
                "replacing open edit session for parameter {} with {}",
                prior.target,
                target
            );
        }

        let seed = map
            .and_then(|m| m.find_param(target))
            .unwrap_or_default();

        let mut session = EditSession {
            target,
            target_name: target_name.to_string(),
            channel: 0,
            domain: ParamDomain::for_type(ControlType::Cc),
            dirty: 0,
            setup: 0,
            text_guard: 0,
        };

        session.setup += 1;
        session.update_type(seed.control_type());
        session.domain.select_value(seed.param);
        session.channel = seed.channel();
        session.setup -= 1;
        session.dirty = 0;

        self.session = Some(session);
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Whether a session is open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the open session has pending changes to commit.
    pub fn can_commit(&self) -> bool {
        self.session.as_ref().is_some_and(EditSession::is_dirty)
    }

    /// Switch the working control type, rebuilding the parameter-number
    /// domain. Marks the session dirty.
    ///
    /// The previous selection index is preserved when still in range of
    /// the new domain; between the two editable domains the previous free
    /// text is preserved too.
    pub fn set_type(&mut self, control_type: ControlType) {
        if let Some(session) = self.session.as_mut() {
            session.update_type(control_type);
            session.changed();
        }
    }

    /// Select the parameter-number entry at `index`. Marks dirty.
    ///
    /// Out-of-range indices are ignored.
    pub fn select_param(&mut self, index: usize) {
        if let Some(session) = self.session.as_mut() {
            if session.domain.select_index(index) {
                session.changed();
            }
        }
    }

    /// Set the working channel (masked to 0-31). Marks dirty.
    pub fn set_channel(&mut self, channel: u16) {
        if let Some(session) = self.session.as_mut() {
            session.channel = channel & CHANNEL_MASK;
            session.changed();
        }
    }

    /// Finalize free-text parameter-number entry (editable domains only).
    ///
    /// The text is accepted, and the session marked dirty, only when it
    /// parses as a non-negative integer; anything else is silently
    /// ignored. Returns whether the text was accepted.
    pub fn finalize_param_text(&mut self, text: &str) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.text_guard > 0 {
            return false;
        }
        session.text_guard += 1;

        let accepted = session.domain.is_editable() && parse_param(text).is_some();
        if accepted {
            session.domain.set_edit_text(text);
            session.changed();
        }

        session.text_guard -= 1;
        accepted
    }

    /// Commit the working key into the table and close the session.
    ///
    /// When the key is already bound to a *different* parameter the
    /// prompt is asked first; cancelling leaves the table untouched and
    /// the session open. On commit any existing binding of the key is
    /// removed before the new one is inserted, so a key never maps to two
    /// parameters.
    pub fn commit(
        &mut self,
        map: Option<&mut ControlMap>,
        prompt: &mut dyn EditorPrompt,
    ) -> CommitOutcome {
        let Some(session) = self.session.as_mut() else {
            return CommitOutcome::Unbound;
        };
        let Some(map) = map else {
            return CommitOutcome::Unbound;
        };

        let key = session.control_key();

        if let Some(existing) = map.find_control(&key) {
            if existing != session.target
                && prompt.confirm_replace(&session.target_name, &key) == ReplaceChoice::Cancel
            {
                return CommitOutcome::Cancelled;
            }
            map.remove_control(&key);
        }

        map.add_control(key, session.target);
        log::debug!("mapped {} to parameter {}", key, session.target);

        session.dirty = 0;
        self.session = None;
        CommitOutcome::Committed
    }

    /// Close the session, asking what to do with pending changes.
    ///
    /// A clean session closes immediately. A dirty one asks the prompt:
    /// `Apply` commits first (a cancelled or unbound commit keeps the
    /// session open), `Discard` closes without committing, `Cancel`
    /// keeps the session open.
    pub fn discard(
        &mut self,
        map: Option<&mut ControlMap>,
        prompt: &mut dyn EditorPrompt,
    ) -> CloseOutcome {
        let Some(session) = self.session.as_ref() else {
            return CloseOutcome::Closed;
        };

        if session.is_dirty() {
            let name = session.target_name.clone();
            match prompt.confirm_close(&name) {
                CloseChoice::Apply => match self.commit(map, prompt) {
                    CommitOutcome::Committed => CloseOutcome::Applied,
                    _ => CloseOutcome::Kept,
                },
                CloseChoice::Discard => {
                    self.session = None;
                    CloseOutcome::Closed
                }
                CloseChoice::Cancel => CloseOutcome::Kept,
            }
        } else {
            self.session = None;
            CloseOutcome::Closed
        }
    }

    /// Tear the session down unconditionally, committing nothing.
    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("closed edit session for parameter {}", session.target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Prompt with scripted answers and call counters.
    struct ScriptedPrompt {
        replace: ReplaceChoice,
        close: CloseChoice,
        replace_calls: usize,
        close_calls: usize,
    }

    impl ScriptedPrompt {
        fn new(replace: ReplaceChoice, close: CloseChoice) -> Self {
            Self {
                replace,
                close,
                replace_calls: 0,
                close_calls: 0,
            }
        }

        fn silent() -> Self {
            Self::new(ReplaceChoice::Replace, CloseChoice::Discard)
        }
    }

    impl EditorPrompt for ScriptedPrompt {
        fn confirm_replace(&mut self, _target_name: &str, _key: &ControlKey) -> ReplaceChoice {
            self.replace_calls += 1;
            self.replace
        }

        fn confirm_close(&mut self, _target_name: &str) -> CloseChoice {
            self.close_calls += 1;
            self.close
        }
    }

    fn open_editor(target: u32, map: Option<&ControlMap>) -> ControlEditor {
        let mut editor = ControlEditor::new();
        editor.open(ParamIndex(target), "CUTOFF", map);
        editor
    }

    #[test]
    fn test_open_seeds_defaults_when_unbound() {
        let map = ControlMap::new();
        let editor = open_editor(5, Some(&map));

        let session = editor.session().unwrap();
        assert_eq!(session.control_type(), ControlType::Cc);
        assert_eq!(session.channel(), 0);
        assert_eq!(session.control_key(), ControlKey::default());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_open_seeds_from_reverse_lookup() {
        let mut map = ControlMap::new();
        let key = ControlKey::new(ControlType::Nrpn, 3, 160);
        map.add_control(key, ParamIndex(5));

        let editor = open_editor(5, Some(&map));
        let session = editor.session().unwrap();
        assert_eq!(session.control_type(), ControlType::Nrpn);
        assert_eq!(session.channel(), 3);
        assert_eq!(session.control_key(), key);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_open_replaces_prior_session() {
        let map = ControlMap::new();
        let mut editor = open_editor(1, Some(&map));
        editor.set_channel(9);
        assert!(editor.can_commit());

        // Last-opened wins, no prompting, prior edits gone.
        editor.open(ParamIndex(2), "RESO", Some(&map));
        let session = editor.session().unwrap();
        assert_eq!(session.target(), ParamIndex(2));
        assert_eq!(session.channel(), 0);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_setters_mark_dirty() {
        let map = ControlMap::new();

        let mut editor = open_editor(0, Some(&map));
        editor.set_type(ControlType::Cc14);
        assert!(editor.can_commit());

        let mut editor = open_editor(0, Some(&map));
        editor.select_param(7);
        assert!(editor.can_commit());

        let mut editor = open_editor(0, Some(&map));
        editor.set_channel(1);
        assert!(editor.can_commit());
    }

    #[test]
    fn test_commit_then_reverse_lookup() {
        let mut map = ControlMap::new();
        let mut prompt = ScriptedPrompt::silent();

        let mut editor = open_editor(9, Some(&map));
        editor.set_type(ControlType::Cc14);
        editor.select_param(6); // CC14 number 7
        editor.set_channel(2);

        let outcome = editor.commit(Some(&mut map), &mut prompt);
        assert_eq!(outcome, CommitOutcome::Committed);
        assert!(!editor.is_open());
        assert_eq!(
            map.find_param(ParamIndex(9)),
            Some(ControlKey::new(ControlType::Cc14, 2, 7))
        );
        assert_eq!(prompt.replace_calls, 0);
    }

    #[test]
    fn test_rpn_free_text_scenario() {
        // open(5, {}) -> defaults; RPN; "513"; commit -> (RPN|ch0, 513) = 5.
        let mut map = ControlMap::new();
        let mut prompt = ScriptedPrompt::silent();

        let mut editor = open_editor(5, Some(&map));
        let session = editor.session().unwrap();
        assert_eq!(session.control_key(), ControlKey::default());

        editor.set_type(ControlType::Rpn);
        assert!(editor.finalize_param_text("513"));
        assert!(editor.session().unwrap().is_dirty());

        assert_eq!(editor.commit(Some(&mut map), &mut prompt), CommitOutcome::Committed);
        let key = ControlKey::new(ControlType::Rpn, 0, 513);
        assert_eq!(map.find_control(&key), Some(ParamIndex(5)));
    }

    #[test]
    fn test_non_numeric_text_is_silent_noop() {
        let map = ControlMap::new();
        let mut editor = open_editor(5, Some(&map));
        editor.set_type(ControlType::Rpn);
        let dirty_before = editor.can_commit();

        assert!(!editor.finalize_param_text("wheel"));
        assert!(!editor.finalize_param_text("-4"));
        assert_eq!(editor.can_commit(), dirty_before);
        assert!(editor.session().unwrap().domain().edit_text().is_none());
    }

    #[test]
    fn test_text_rejected_on_fixed_domain() {
        let map = ControlMap::new();
        let mut editor = open_editor(5, Some(&map));
        assert!(!editor.finalize_param_text("42"));
    }

    #[test]
    fn test_conflict_prompt_and_overwrite() {
        // (CC|ch0, 7) -> 2 exists; binding it to 9 prompts, then rebinds.
        let mut map = ControlMap::new();
        let key = ControlKey::new(ControlType::Cc, 0, 7);
        map.add_control(key, ParamIndex(2));

        let mut prompt = ScriptedPrompt::new(ReplaceChoice::Replace, CloseChoice::Cancel);
        let mut editor = open_editor(9, Some(&map));
        editor.select_param(7);

        assert_eq!(editor.commit(Some(&mut map), &mut prompt), CommitOutcome::Committed);
        assert_eq!(prompt.replace_calls, 1);
        assert_eq!(map.find_control(&key), Some(ParamIndex(9)));
        assert_eq!(map.find_param(ParamIndex(2)), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_conflict_cancel_leaves_map_untouched() {
        let mut map = ControlMap::new();
        map.add_control(ControlKey::new(ControlType::Cc, 0, 7), ParamIndex(2));
        map.add_control(ControlKey::new(ControlType::Cc, 1, 10), ParamIndex(4));
        let before = map.clone();

        let mut prompt = ScriptedPrompt::new(ReplaceChoice::Cancel, CloseChoice::Cancel);
        let mut editor = open_editor(9, Some(&map));
        editor.select_param(7);

        assert_eq!(editor.commit(Some(&mut map), &mut prompt), CommitOutcome::Cancelled);
        assert!(editor.is_open());
        assert_eq!(map, before);
    }

    #[test]
    fn test_rebind_same_target_does_not_prompt() {
        let mut map = ControlMap::new();
        let key = ControlKey::new(ControlType::Cc, 0, 7);
        map.add_control(key, ParamIndex(9));

        let mut prompt = ScriptedPrompt::new(ReplaceChoice::Cancel, CloseChoice::Cancel);
        let mut editor = open_editor(9, Some(&map));
        editor.select_param(7);

        // Same key, same target: no confirmation even with a cancelling
        // prompt.
        assert_eq!(editor.commit(Some(&mut map), &mut prompt), CommitOutcome::Committed);
        assert_eq!(prompt.replace_calls, 0);
        assert_eq!(map.find_control(&key), Some(ParamIndex(9)));
    }

    #[test]
    fn test_rebind_moves_binding_between_params() {
        // Key bound to A, committed for B: A has no binding afterward.
        let mut map = ControlMap::new();
        let key = ControlKey::new(ControlType::Rpn, 0, 2);
        map.add_control(key, ParamIndex(1)); // A

        let mut prompt = ScriptedPrompt::silent();
        let mut editor = open_editor(8, Some(&map)); // B
        editor.set_type(ControlType::Rpn);
        editor.select_param(2);

        assert_eq!(editor.commit(Some(&mut map), &mut prompt), CommitOutcome::Committed);
        assert_eq!(map.find_control(&key), Some(ParamIndex(8)));
        assert_eq!(map.find_param(ParamIndex(1)), None);
    }

    #[test]
    fn test_type_round_trip_preserves_selection() {
        let map = ControlMap::new();
        let mut editor = open_editor(0, Some(&map));
        editor.select_param(3);

        // Index 3 is in range of both domains, so it survives the round
        // trip.
        editor.set_type(ControlType::Rpn);
        editor.set_type(ControlType::Cc);
        assert_eq!(editor.session().unwrap().domain().current_value(), 3);
    }

    #[test]
    fn test_type_round_trip_out_of_range_resets() {
        let map = ControlMap::new();
        let mut editor = open_editor(0, Some(&map));
        editor.select_param(74);

        // Index 74 does not fit the sparse RPN domain, so the selection
        // is lost on the way there.
        editor.set_type(ControlType::Rpn);
        editor.set_type(ControlType::Cc);
        assert_eq!(editor.session().unwrap().domain().current_value(), 0);
    }

    #[test]
    fn test_type_switch_out_of_range_falls_back_to_default() {
        let map = ControlMap::new();
        let mut editor = open_editor(0, Some(&map));
        editor.select_param(74);

        // CC index 74 is outside the 31-entry CC14 domain.
        editor.set_type(ControlType::Cc14);
        assert_eq!(editor.session().unwrap().domain().selected_index(), 0);
        assert_eq!(editor.session().unwrap().domain().current_value(), 1);
    }

    #[test]
    fn test_type_switch_preserves_text_between_editable_domains() {
        let map = ControlMap::new();
        let mut editor = open_editor(0, Some(&map));
        editor.set_type(ControlType::Rpn);
        editor.finalize_param_text("900");

        editor.set_type(ControlType::Nrpn);
        assert_eq!(editor.session().unwrap().domain().current_value(), 900);
    }

    #[test]
    fn test_dirty_lifecycle() {
        let mut map = ControlMap::new();
        let mut prompt = ScriptedPrompt::silent();

        let mut editor = open_editor(3, Some(&map));
        assert!(!editor.can_commit());
        editor.set_channel(5);
        assert!(editor.can_commit());
        editor.commit(Some(&mut map), &mut prompt);
        assert!(!editor.is_open());

        // Reopening the committed binding starts clean again.
        editor.open(ParamIndex(3), "CUTOFF", Some(&map));
        assert!(!editor.can_commit());
        assert_eq!(editor.session().unwrap().channel(), 5);
    }

    #[test]
    fn test_discard_clean_session_closes_without_prompt() {
        let map = ControlMap::new();
        let mut prompt = ScriptedPrompt::new(ReplaceChoice::Cancel, CloseChoice::Cancel);
        let mut editor = open_editor(0, Some(&map));

        assert_eq!(editor.discard(None, &mut prompt), CloseOutcome::Closed);
        assert!(!editor.is_open());
        assert_eq!(prompt.close_calls, 0);
    }

    #[test]
    fn test_discard_dirty_session_three_ways() {
        let mut map = ControlMap::new();

        // Cancel keeps the session open.
        let mut prompt = ScriptedPrompt::new(ReplaceChoice::Replace, CloseChoice::Cancel);
        let mut editor = open_editor(0, Some(&map));
        editor.set_channel(1);
        assert_eq!(editor.discard(Some(&mut map), &mut prompt), CloseOutcome::Kept);
        assert!(editor.is_open());
        assert!(map.is_empty());

        // Discard closes without committing.
        let mut prompt = ScriptedPrompt::new(ReplaceChoice::Replace, CloseChoice::Discard);
        assert_eq!(editor.discard(Some(&mut map), &mut prompt), CloseOutcome::Closed);
        assert!(!editor.is_open());
        assert!(map.is_empty());

        // Apply commits, then closes.
        let mut prompt = ScriptedPrompt::new(ReplaceChoice::Replace, CloseChoice::Apply);
        let mut editor = open_editor(4, Some(&map));
        editor.set_channel(2);
        assert_eq!(editor.discard(Some(&mut map), &mut prompt), CloseOutcome::Applied);
        assert!(!editor.is_open());
        assert_eq!(
            map.find_param(ParamIndex(4)),
            Some(ControlKey::new(ControlType::Cc, 2, 0))
        );
    }

    #[test]
    fn test_discard_apply_with_conflict_cancel_keeps_session() {
        let mut map = ControlMap::new();
        map.add_control(ControlKey::default(), ParamIndex(1));

        let mut prompt = ScriptedPrompt::new(ReplaceChoice::Cancel, CloseChoice::Apply);
        let mut editor = open_editor(6, Some(&map));
        editor.set_channel(0);

        // Apply runs commit, the replace prompt cancels it, so the close
        // is abandoned too.
        assert_eq!(editor.discard(Some(&mut map), &mut prompt), CloseOutcome::Kept);
        assert!(editor.is_open());
        assert_eq!(map.find_control(&ControlKey::default()), Some(ParamIndex(1)));
    }

    #[test]
    fn test_unbound_map_is_noop() {
        let mut prompt = ScriptedPrompt::silent();
        let mut editor = open_editor(0, None);
        editor.set_channel(4);

        assert_eq!(editor.commit(None, &mut prompt), CommitOutcome::Unbound);
        assert!(editor.is_open());
    }

    #[test]
    fn test_close_clears_the_slot() {
        let map = ControlMap::new();
        let mut editor = open_editor(0, Some(&map));
        editor.set_channel(4);
        editor.close();
        assert!(!editor.is_open());

        // A later open does not see stale state.
        editor.open(ParamIndex(1), "RESO", Some(&map));
        assert!(!editor.can_commit());
        assert_eq!(editor.session().unwrap().channel(), 0);
    }
}
