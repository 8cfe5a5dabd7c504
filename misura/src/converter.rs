//! Converter panel instance
//!
//! Each panel owns an isolated copy of quantity and selection state; there
//! is no cross-instance sharing. `result()` is a pure function of current
//! state, so a reactive rendering layer can call it repeatedly.

use misura_units::{convert_display_in, Category, UnitDef, UNITS};
use tracing::debug;

use crate::config::{config_for, ConverterConfig};
use crate::selection::{Selection, SelectionState};

/// One category panel: configuration, quantity input, unit selection
#[derive(Debug, Clone)]
pub struct Converter {
    config: &'static ConverterConfig,
    quantity: String,
    selection: Selection,
}

impl Converter {
    /// New panel with the configured default unit pair preselected
    pub fn new(category: Category) -> Self {
        let config = config_for(category);
        let selection = Selection::new(
            UNITS.get_in(category, config.default_from).map(|u| u.key),
            UNITS.get_in(category, config.default_to).map(|u| u.key),
        );
        Converter {
            config,
            quantity: config.default_quantity.to_string(),
            selection,
        }
    }

    pub fn category(&self) -> Category {
        self.config.category
    }

    pub fn config(&self) -> &'static ConverterConfig {
        self.config
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Units this panel offers, in display order
    pub fn units(&self) -> &'static [UnitDef] {
        UNITS.units_in(self.config.category)
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.quantity = quantity.into();
    }

    /// Apply a unit pick; keys outside this panel's category are ignored
    pub fn select_unit(&mut self, key: &str) {
        match UNITS.get_in(self.config.category, key) {
            Some(unit) => self.selection.select(unit.key),
            None => debug!(category = %self.config.category, key, "ignoring unknown unit pick"),
        }
    }

    /// Reset both slots and restore the configured default quantity
    pub fn clear(&mut self) {
        self.selection.clear();
        self.quantity = self.config.default_quantity.to_string();
    }

    /// Exchange from/to when both are selected
    pub fn swap(&mut self) {
        self.selection.swap();
    }

    pub fn from_unit(&self) -> Option<&'static UnitDef> {
        self.selection
            .from
            .and_then(|key| UNITS.get_in(self.config.category, key))
    }

    pub fn to_unit(&self) -> Option<&'static UnitDef> {
        self.selection
            .to
            .and_then(|key| UNITS.get_in(self.config.category, key))
    }

    /// Current conversion result; "0" until both units are selected
    pub fn result(&self) -> String {
        match (self.selection.from, self.selection.to) {
            (Some(from), Some(to)) => {
                convert_display_in(self.config.category, &self.quantity, from, to)
            }
            _ => "0".to_string(),
        }
    }
}
