//! Quantity type - a value with an associated unit

use std::fmt;

use misura_core::{format_result, ConversionError};
use serde::Serialize;

use crate::unit::UnitDef;

/// A measured value paired with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: &'static UnitDef,
}

impl Quantity {
    pub fn new(value: f64, unit: &'static UnitDef) -> Self {
        Quantity { value, unit }
    }

    /// Convert to another unit of the same category
    pub fn convert_to(&self, target: &'static UnitDef) -> Result<Quantity, ConversionError> {
        let value = self.unit.convert_to(self.value, target)?;
        Ok(Quantity::new(value, target))
    }

    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(other.unit)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_result(self.value), self.unit.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::UNITS;
    use crate::unit::Category;

    #[test]
    fn test_quantity_creation() {
        let tsp = UNITS.get("tsp").unwrap();
        let q = Quantity::new(3.0, tsp);
        assert_eq!(q.value, 3.0);
        assert_eq!(q.unit.key, "tsp");
    }

    #[test]
    fn test_convert_to() {
        let oz = UNITS.get_in(Category::Weight, "oz").unwrap();
        let lb = UNITS.get_in(Category::Weight, "lb").unwrap();
        let q = Quantity::new(16.0, oz).convert_to(lb).unwrap();
        assert_eq!(q.unit.key, "lb");
        assert!((q.value - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_convert_to_incompatible() {
        let tsp = UNITS.get("tsp").unwrap();
        let mph = UNITS.get("mph").unwrap();
        assert!(Quantity::new(1.0, tsp).convert_to(mph).is_err());
    }

    #[test]
    fn test_display() {
        let c = UNITS.get_in(Category::Temperature, "c").unwrap();
        assert_eq!(format!("{}", Quantity::new(21.5, c)), "21.50 °C");
    }
}
