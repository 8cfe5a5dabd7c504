//! Misura Units - Unit registry and conversion engine
//!
//! Converts kitchen measurements within six categories:
//! - Volume (tsp, tbsp, cup, fl oz, pint, qt, gal, ml, L, plus the
//!   water-density g/kg aliases)
//! - Weight (oz, lb, g, kg, ton)
//! - Temperature (°F, °C)
//! - Length (in, ft, yd, mi, mm, cm, m, km)
//! - Area (in², ft², yd², acre, mi², cm², m², ha)
//! - Speed (mph, ft/s, km/h, m/s, knot)
//!
//! Linear categories convert through a per-category base factor;
//! temperature uses the piecewise Fahrenheit/Celsius formulas. The typed
//! API returns `ConversionError`; the `convert_display` pipeline recovers
//! every failure into "0" for UI consumption.

mod convert;
mod parse;
mod quantity;
mod registry;
mod unit;

pub use convert::{convert, convert_display, convert_display_in};
pub use parse::{parse_conversion, parse_quantity};
pub use quantity::Quantity;
pub use registry::{UnitRegistry, UNITS};
pub use unit::{Category, ConversionRule, UnitDef};
