//! From/to unit selection state machine
//!
//! A panel has two slots. Every user pick routes through `select`, whose
//! case order is the whole policy: tapping a selected unit deselects it,
//! otherwise the pick fills the first empty slot, and once both are full
//! the most recent pick replaces "to".

use serde::Serialize;

/// Derived state of the two selection slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionState {
    NoneSelected,
    FromOnly,
    ToOnly,
    BothSelected,
}

/// The from/to slots of one converter panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub from: Option<&'static str>,
    pub to: Option<&'static str>,
}

impl Selection {
    pub fn new(from: Option<&'static str>, to: Option<&'static str>) -> Self {
        Selection { from, to }
    }

    pub fn state(&self) -> SelectionState {
        match (self.from, self.to) {
            (None, None) => SelectionState::NoneSelected,
            (Some(_), None) => SelectionState::FromOnly,
            (None, Some(_)) => SelectionState::ToOnly,
            (Some(_), Some(_)) => SelectionState::BothSelected,
        }
    }

    /// Apply one unit pick; first matching case wins
    pub fn select(&mut self, key: &'static str) {
        // Case 1: already the "from" unit
        if self.from == Some(key) {
            self.from = None;
            return;
        }

        // Case 2: already the "to" unit
        if self.to == Some(key) {
            self.to = None;
            return;
        }

        // Case 3: no "from" yet
        if self.from.is_none() {
            self.from = Some(key);
            return;
        }

        // Case 4: no "to" yet
        if self.to.is_none() {
            self.to = Some(key);
            return;
        }

        // Case 5: both set, replace "to"
        self.to = Some(key);
    }

    pub fn clear(&mut self) {
        self.from = None;
        self.to = None;
    }

    /// Exchange from/to; a no-op unless both are set
    pub fn swap(&mut self) {
        if self.from.is_some() && self.to.is_some() {
            std::mem::swap(&mut self.from, &mut self.to);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }
}
