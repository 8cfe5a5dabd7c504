//! Unit representation with conversion factors

use std::fmt;

use misura_core::ConversionError;
use serde::{Deserialize, Serialize};

/// A family of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Volume,
    Weight,
    Temperature,
    Length,
    Area,
    Speed,
}

impl Category {
    /// All categories in declaration order (the order panels render in)
    pub const ALL: [Category; 6] = [
        Category::Volume,
        Category::Weight,
        Category::Temperature,
        Category::Length,
        Category::Area,
        Category::Speed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Volume => "volume",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Length => "length",
            Category::Area => "area",
            Category::Speed => "speed",
        }
    }

    /// The conversion rule shared by every unit in this category
    pub fn rule(&self) -> ConversionRule {
        match self {
            Category::Temperature => ConversionRule::AffineTemperature,
            _ => ConversionRule::Linear,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How values move between units of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionRule {
    /// Multiplicative factor ratio through the category base unit
    Linear,
    /// Piecewise Fahrenheit/Celsius formulas
    AffineTemperature,
}

/// One convertible unit: identity, display strings, and its ratio to the
/// category base unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDef {
    /// Unique key within the category (e.g. "tsp", "kg", "f")
    pub key: &'static str,
    /// Full name (e.g. "teaspoon", "kilogram", "Fahrenheit")
    pub name: &'static str,
    /// Short display label (e.g. "tsp", "°F")
    pub label: &'static str,
    pub category: Category,
    /// Ratio to the category base unit; 1.0 and unused for temperature
    pub factor: f64,
}

impl UnitDef {
    pub const fn new(
        key: &'static str,
        name: &'static str,
        label: &'static str,
        category: Category,
        factor: f64,
    ) -> Self {
        UnitDef { key, name, label, category, factor }
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &UnitDef) -> bool {
        self.category == other.category
    }

    /// Convert a value from this unit to another unit of the same category
    pub fn convert_to(&self, value: f64, target: &UnitDef) -> Result<f64, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::IncompatibleCategories {
                from: self.key.to_string(),
                from_category: self.category.name().to_string(),
                to: target.key.to_string(),
                to_category: target.category.name().to_string(),
            });
        }

        // Same-unit conversion is the identity; skipping the factor ratio
        // keeps it exact under floating point.
        if self.key == target.key {
            return Ok(value);
        }

        Ok(match self.category.rule() {
            ConversionRule::Linear => value * self.factor / target.factor,
            ConversionRule::AffineTemperature => match (self.key, target.key) {
                ("f", "c") => (value - 32.0) * 5.0 / 9.0,
                ("c", "f") => value * 9.0 / 5.0 + 32.0,
                _ => value,
            },
        })
    }
}

impl fmt::Display for UnitDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TSP: UnitDef = UnitDef::new("tsp", "teaspoon", "tsp", Category::Volume, 4.93);
    const TBSP: UnitDef = UnitDef::new("tbsp", "tablespoon", "tbsp", Category::Volume, 14.79);
    const OZ: UnitDef = UnitDef::new("oz", "ounce", "oz", Category::Weight, 28.35);
    const F: UnitDef = UnitDef::new("f", "Fahrenheit", "°F", Category::Temperature, 1.0);
    const C: UnitDef = UnitDef::new("c", "Celsius", "°C", Category::Temperature, 1.0);

    #[test]
    fn test_compatible_units() {
        assert!(TSP.is_compatible(&TBSP));
        assert!(!TSP.is_compatible(&OZ));
    }

    #[test]
    fn test_linear_conversion() {
        // 3 tsp is exactly one tablespoon: 3 * 4.93 = 14.79
        let result = TSP.convert_to(3.0, &TBSP).unwrap();
        assert!((result - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_identity() {
        assert_eq!(TSP.convert_to(2.5, &TSP).unwrap(), 2.5);
    }

    #[test]
    fn test_temperature_f_to_c() {
        assert_eq!(F.convert_to(32.0, &C).unwrap(), 0.0);
        assert_eq!(F.convert_to(212.0, &C).unwrap(), 100.0);
    }

    #[test]
    fn test_temperature_c_to_f() {
        assert_eq!(C.convert_to(0.0, &F).unwrap(), 32.0);
        assert_eq!(C.convert_to(100.0, &F).unwrap(), 212.0);
    }

    #[test]
    fn test_temperature_identity() {
        assert_eq!(F.convert_to(70.0, &F).unwrap(), 70.0);
        assert_eq!(C.convert_to(-40.0, &C).unwrap(), -40.0);
    }

    #[test]
    fn test_incompatible_categories() {
        let err = TSP.convert_to(1.0, &OZ).unwrap_err();
        assert!(matches!(err, ConversionError::IncompatibleCategories { .. }));
    }

    #[test]
    fn test_rule_per_category() {
        assert_eq!(Category::Volume.rule(), ConversionRule::Linear);
        assert_eq!(Category::Temperature.rule(), ConversionRule::AffineTemperature);
    }
}
