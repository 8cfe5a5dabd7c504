//! Misura - kitchen measurement converter core
//!
//! The in-process API a presentation layer drives:
//! - `convert`: the composed registry-lookup + conversion + formatting
//!   pipeline ("3" tsp→tbsp gives "1.00"; any failure gives "0")
//! - `Converter`: one category panel's state (quantity, from/to selection)
//! - `config`: the static per-category configuration table
//!
//! All state lives in `Converter` instances the caller owns; the unit
//! tables are a process-wide immutable registry.

mod config;
mod converter;
mod selection;

pub use config::{config_for, table_json, ConverterConfig, CONFIGS};
pub use converter::Converter;
pub use selection::{Selection, SelectionState};

pub use misura_core::{format_result, parse_loose, ConversionError};
pub use misura_units::{
    convert_display_in, parse_conversion, parse_quantity, Category, ConversionRule, Quantity,
    UnitDef, UnitRegistry, UNITS,
};

/// Convert a quantity string between two unit keys and format the result.
///
/// This is the whole pipeline presentation code calls on every input event.
pub fn convert(quantity: &str, from_key: &str, to_key: &str) -> String {
    misura_units::convert_display(quantity, from_key, to_key)
}
