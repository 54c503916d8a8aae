//! Parameter-number domains.
//!
//! A [`ParamDomain`] is the toolkit-neutral model of the parameter-number
//! picker: an ordered list of labelled numbers for one [`ControlType`],
//! plus the current selection. Fixed domains (CC, CC14) enumerate every
//! valid number; editable domains (RPN, NRPN) list only the well-known
//! names and additionally accept free-text numeric entry for anything
//! else in the 14-bit space.

use crate::controller::ControlType;
use crate::names::{param_name_for, NRPN_NAMES, RPN_NAMES};

/// One labelled entry in a parameter-number domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamItem {
    /// Display label, `"<number> - <name>"` (name part may be empty).
    pub label: String,
    /// The parameter number the label stands for.
    pub value: u16,
}

impl ParamItem {
    fn new(value: u16, name: &str) -> Self {
        Self {
            label: format!("{value} - {name}").trim_end().to_string(),
            value,
        }
    }
}

/// The parameter-number picker model for one control type.
#[derive(Debug, Clone)]
pub struct ParamDomain {
    control_type: ControlType,
    items: Vec<ParamItem>,
    /// Currently selected item index.
    selected: usize,
    /// Free-text override, editable domains only.
    edit_text: Option<String>,
}

impl ParamDomain {
    /// Build the domain for a control type, selection at the default.
    pub fn for_type(control_type: ControlType) -> Self {
        let items = match control_type {
            ControlType::Cc => (0..128)
                .map(|n| ParamItem::new(n, param_name_for(control_type, n)))
                .collect(),
            ControlType::Cc14 => (1..32)
                .map(|n| ParamItem::new(n, param_name_for(control_type, n)))
                .collect(),
            ControlType::Rpn => RPN_NAMES
                .iter()
                .map(|&(n, name)| ParamItem::new(n, name))
                .collect(),
            ControlType::Nrpn => NRPN_NAMES
                .iter()
                .map(|&(n, name)| ParamItem::new(n, name))
                .collect(),
        };
        Self {
            control_type,
            items,
            selected: 0,
            edit_text: None,
        }
    }

    /// The control type this domain enumerates.
    pub fn control_type(&self) -> ControlType {
        self.control_type
    }

    /// Whether free-text numeric entry is accepted.
    pub fn is_editable(&self) -> bool {
        self.control_type.is_editable()
    }

    /// The ordered labelled entries.
    pub fn items(&self) -> &[ParamItem] {
        &self.items
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the domain has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the entry holding `value`, if enumerated.
    pub fn index_of(&self, value: u16) -> Option<usize> {
        self.items.iter().position(|item| item.value == value)
    }

    /// Value of the entry at `index`, if in range.
    pub fn value_at(&self, index: usize) -> Option<u16> {
        self.items.get(index).map(|item| item.value)
    }

    /// The currently selected item index.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The free-text override, if any.
    pub fn edit_text(&self) -> Option<&str> {
        self.edit_text.as_deref()
    }

    /// Select the entry at `index`. Out-of-range indices are ignored.
    ///
    /// Selecting an entry clears any free-text override.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected = index;
            self.edit_text = None;
            true
        } else {
            false
        }
    }

    /// Select by value: pick the matching entry when enumerated, otherwise
    /// (editable domains only) install the number as free text.
    ///
    /// Values outside a fixed domain leave the selection at the domain
    /// default.
    pub fn select_value(&mut self, value: u16) {
        if let Some(index) = self.index_of(value) {
            self.selected = index;
            self.edit_text = None;
        } else if self.is_editable() {
            self.edit_text = Some(value.to_string());
        } else {
            self.selected = 0;
            self.edit_text = None;
        }
    }

    /// Install free text verbatim (editable domains only).
    pub fn set_edit_text(&mut self, text: &str) {
        if self.is_editable() {
            self.edit_text = Some(text.to_string());
        }
    }

    /// The effective parameter number.
    ///
    /// For editable domains a parseable free-text override wins; otherwise
    /// the selected entry's value, falling back to the type default.
    pub fn current_value(&self) -> u16 {
        if self.is_editable() {
            if let Some(value) = self.edit_text.as_deref().and_then(parse_param) {
                return value;
            }
        }
        self.value_at(self.selected)
            .unwrap_or_else(|| self.control_type.default_param())
    }
}

/// Parse a free-text parameter number.
///
/// Accepts non-negative integers only; anything else yields `None`.
pub fn parse_param(text: &str) -> Option<u16> {
    text.trim().parse::<u16>().ok()
}
