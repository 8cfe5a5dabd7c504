//! Conversion entry points
//!
//! Two layers: a typed `convert` for callers that want errors, and the
//! lenient `convert_display` pipeline the UI consumes, which recovers
//! every failure into the "0" sentinel.

use misura_core::{format_result, try_parse_loose, ConversionError};
use tracing::{debug, warn};

use crate::registry::UNITS;
use crate::unit::{Category, UnitDef};

/// Convert a quantity between two units of the same category.
///
/// Errors when the categories differ; the category precondition lives here
/// in the engine, not in whatever UI offers the unit buttons.
pub fn convert(quantity: f64, from: &UnitDef, to: &UnitDef) -> Result<f64, ConversionError> {
    from.convert_to(quantity, to)
}

/// The composed lookup + parse + convert + format pipeline.
///
/// Total: unknown keys, category mismatches, and unparseable quantities all
/// render as "0" so the caller never sees an error.
pub fn convert_display(quantity: &str, from_key: &str, to_key: &str) -> String {
    let Some((from, to)) = UNITS.resolve_pair(from_key, to_key) else {
        warn!(from_key, to_key, "no category holds both units, rendering 0");
        return "0".to_string();
    };
    convert_resolved(quantity, from, to)
}

/// Category-scoped variant used by converter panels, where the category is
/// fixed and keys reused across categories ("g", "kg") must not escape it.
pub fn convert_display_in(
    category: Category,
    quantity: &str,
    from_key: &str,
    to_key: &str,
) -> String {
    let (Some(from), Some(to)) = (
        UNITS.get_in(category, from_key),
        UNITS.get_in(category, to_key),
    ) else {
        warn!(%category, from_key, to_key, "unit missing from category, rendering 0");
        return "0".to_string();
    };
    convert_resolved(quantity, from, to)
}

fn convert_resolved(quantity: &str, from: &UnitDef, to: &UnitDef) -> String {
    let Some(value) = try_parse_loose(quantity) else {
        debug!(quantity, "unparseable quantity, rendering 0");
        return "0".to_string();
    };

    match convert(value, from, to) {
        Ok(result) => format_result(result),
        Err(err) => {
            warn!(%err, "conversion failed, rendering 0");
            "0".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units_of(category: Category) -> &'static [UnitDef] {
        UNITS.units_in(category)
    }

    #[test]
    fn test_round_trip_all_linear_categories() {
        let linear = [
            Category::Volume,
            Category::Weight,
            Category::Length,
            Category::Area,
            Category::Speed,
        ];
        for category in linear {
            for a in units_of(category) {
                for b in units_of(category) {
                    let x = 2.5;
                    let there = convert(x, a, b).unwrap();
                    let back = convert(there, b, a).unwrap();
                    assert!(
                        (back - x).abs() <= x * 1e-9,
                        "{} -> {} -> {} drifted: {}",
                        a.key,
                        b.key,
                        a.key,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_identity_all_units() {
        for category in Category::ALL {
            for unit in units_of(category) {
                assert_eq!(convert(7.25, unit, unit).unwrap(), 7.25);
            }
        }
    }

    #[test]
    fn test_temperature_fixed_points() {
        let f = UNITS.get_in(Category::Temperature, "f").unwrap();
        let c = UNITS.get_in(Category::Temperature, "c").unwrap();
        assert_eq!(convert(32.0, f, c).unwrap(), 0.0);
        assert_eq!(convert(0.0, c, f).unwrap(), 32.0);
        assert_eq!(convert(100.0, c, f).unwrap(), 212.0);
    }

    #[test]
    fn test_display_teaspoons_to_tablespoons() {
        assert_eq!(convert_display("3", "tsp", "tbsp"), "1.00");
    }

    #[test]
    fn test_display_ounces_to_pounds() {
        assert_eq!(convert_display("16", "oz", "lb"), "1.00");
    }

    #[test]
    fn test_display_non_numeric_quantity() {
        assert_eq!(convert_display("abc", "oz", "lb"), "0");
        assert_eq!(convert_display("", "f", "c"), "0");
    }

    #[test]
    fn test_display_cross_category() {
        assert_eq!(convert_display("5", "tsp", "lb"), "0");
    }

    #[test]
    fn test_display_unknown_unit() {
        assert_eq!(convert_display("5", "tsp", "furlong"), "0");
    }

    #[test]
    fn test_display_temperature() {
        assert_eq!(convert_display("70", "f", "c"), "21.11");
        assert_eq!(convert_display("212", "f", "c"), "100.0");
    }

    #[test]
    fn test_display_water_density_volume() {
        // 1 cup of water weighs 236.59 g
        assert_eq!(convert_display("1", "cup", "g"), "236.6");
    }

    #[test]
    fn test_display_in_pins_category() {
        // In the weight panel, g -> kg is a weight conversion
        assert_eq!(convert_display_in(Category::Weight, "500", "g", "kg"), "0.500");
        // Keys from another category do not resolve
        assert_eq!(convert_display_in(Category::Weight, "1", "tsp", "g"), "0");
    }

    #[test]
    fn test_display_magnitude_bands() {
        // 1 tsp in gallons is tiny: 4.93 / 3785.41 ≈ 0.0013
        assert_eq!(convert_display("1", "tsp", "gallon"), "0.0013");
        // 1 gallon in teaspoons is large: 3785.41 / 4.93 ≈ 767.8
        assert_eq!(convert_display("1", "gallon", "tsp"), "767.8");
    }
}
