//! Unit definitions - the six converter categories
//!
//! Tables are declaration-ordered: `units_in` and `categories` iterate in
//! the order units render in the UI, which keeps panel layout and tests
//! deterministic.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{Category, UnitDef};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units
pub struct UnitRegistry {
    tables: Vec<(Category, Vec<UnitDef>)>,
    aliases: HashMap<&'static str, &'static str>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            tables: Vec::new(),
            aliases: HashMap::new(),
        };
        registry.register_volume_units();
        registry.register_weight_units();
        registry.register_temperature_units();
        registry.register_length_units();
        registry.register_area_units();
        registry.register_speed_units();
        registry.register_aliases();
        registry
    }

    /// Get a unit by key or alias; first category in declaration order wins
    pub fn get(&self, key: &str) -> Option<&UnitDef> {
        if let Some(unit) = self.all_units().find(|u| u.key == key) {
            return Some(unit);
        }
        if let Some(canonical) = self.aliases.get(key) {
            return self.all_units().find(|u| u.key == *canonical);
        }
        None
    }

    /// Get a unit by key within one category
    pub fn get_in(&self, category: Category, key: &str) -> Option<&UnitDef> {
        let key = self.canonical(key);
        self.units_in(category).iter().find(|u| u.key == key)
    }

    /// All units of a category in declaration order
    pub fn units_in(&self, category: Category) -> &[UnitDef] {
        self.tables
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, units)| units.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve a from/to key pair against the first category containing both.
    ///
    /// This is what keeps the same-category invariant unviolable through the
    /// string API: keys reused across categories (the water-density "g"/"kg"
    /// volume aliases) resolve to whichever category holds the whole pair.
    pub fn resolve_pair(&self, from_key: &str, to_key: &str) -> Option<(&UnitDef, &UnitDef)> {
        let from_key = self.canonical(from_key);
        let to_key = self.canonical(to_key);
        for (_, units) in &self.tables {
            let from = units.iter().find(|u| u.key == from_key);
            let to = units.iter().find(|u| u.key == to_key);
            if let (Some(from), Some(to)) = (from, to) {
                return Some((from, to));
            }
        }
        None
    }

    /// Categories in declaration order
    pub fn categories(&self) -> Vec<Category> {
        self.tables.iter().map(|(c, _)| *c).collect()
    }

    /// All unit keys in declaration order
    pub fn keys(&self) -> Vec<&'static str> {
        self.all_units().map(|u| u.key).collect()
    }

    fn all_units(&self) -> impl Iterator<Item = &UnitDef> + '_ {
        self.tables.iter().flat_map(|(_, units)| units)
    }

    fn canonical<'a>(&'a self, key: &'a str) -> &'a str {
        self.aliases.get(key).copied().unwrap_or(key)
    }

    fn register(&mut self, category: Category, units: Vec<UnitDef>) {
        self.tables.push((category, units));
    }

    fn alias(&mut self, alias: &'static str, key: &'static str) {
        self.aliases.insert(alias, key);
    }

    fn register_volume_units(&mut self) {
        let u = |key, name, label, factor| UnitDef::new(key, name, label, Category::Volume, factor);
        self.register(
            Category::Volume,
            vec![
                // Base: milliliter
                u("tsp", "teaspoon", "tsp", 4.93),
                u("tbsp", "tablespoon", "tbsp", 14.79),
                u("cup", "cup", "cup", 236.59),
                u("floz", "fluid ounce", "fl oz", 29.57),
                u("pint", "pint", "pint", 473.18),
                u("quart", "quart", "qt", 946.35),
                u("gallon", "gallon", "gal", 3785.41),
                u("ml", "milliliter", "ml", 1.0),
                u("liter", "liter", "L", 1000.0),
                // Water density: 1 ml = 1 gram
                u("g", "gram", "g", 1.0),
                u("kg", "kilogram", "kg", 1000.0),
            ],
        );
    }

    fn register_weight_units(&mut self) {
        let u = |key, name, label, factor| UnitDef::new(key, name, label, Category::Weight, factor);
        self.register(
            Category::Weight,
            vec![
                // Base: gram
                u("oz", "ounce", "oz", 28.35),
                u("lb", "pound", "lb", 453.59),
                u("g", "gram", "g", 1.0),
                u("kg", "kilogram", "kg", 1000.0),
                u("ton", "metric ton", "ton", 1_000_000.0),
            ],
        );
    }

    fn register_temperature_units(&mut self) {
        let u = |key, name, label| UnitDef::new(key, name, label, Category::Temperature, 1.0);
        self.register(
            Category::Temperature,
            vec![u("f", "Fahrenheit", "°F"), u("c", "Celsius", "°C")],
        );
    }

    fn register_length_units(&mut self) {
        let u = |key, name, label, factor| UnitDef::new(key, name, label, Category::Length, factor);
        self.register(
            Category::Length,
            vec![
                // Base: centimeter
                u("inch", "inch", "in", 2.54),
                u("ft", "foot", "ft", 30.48),
                u("yard", "yard", "yd", 91.44),
                u("mile", "mile", "mi", 160_934.0),
                u("mm", "millimeter", "mm", 0.1),
                u("cm", "centimeter", "cm", 1.0),
                u("m", "meter", "m", 100.0),
                u("km", "kilometer", "km", 100_000.0),
            ],
        );
    }

    fn register_area_units(&mut self) {
        let u = |key, name, label, factor| UnitDef::new(key, name, label, Category::Area, factor);
        self.register(
            Category::Area,
            vec![
                // Base: square centimeter
                u("sqin", "square inch", "in²", 6.4516),
                u("sqft", "square foot", "ft²", 929.03),
                u("sqyd", "square yard", "yd²", 8_361.27),
                u("acre", "acre", "acre", 4_046_860.0),
                u("sqmile", "square mile", "mi²", 25_899_881_103.36),
                u("sqcm", "square centimeter", "cm²", 1.0),
                u("sqm", "square meter", "m²", 10_000.0),
                u("hectare", "hectare", "ha", 100_000_000.0),
            ],
        );
    }

    fn register_speed_units(&mut self) {
        let u = |key, name, label, factor| UnitDef::new(key, name, label, Category::Speed, factor);
        self.register(
            Category::Speed,
            vec![
                // Base: kilometers per hour
                u("mph", "miles per hour", "mph", 1.60934),
                u("fps", "feet per second", "ft/s", 1.09728),
                u("kmh", "kilometers per hour", "km/h", 1.0),
                u("ms", "meters per second", "m/s", 3.6),
                u("knot", "knot", "knot", 1.852),
            ],
        );
    }

    fn register_aliases(&mut self) {
        // Volume
        self.alias("teaspoon", "tsp");
        self.alias("teaspoons", "tsp");
        self.alias("tablespoon", "tbsp");
        self.alias("tablespoons", "tbsp");
        self.alias("cups", "cup");
        self.alias("milliliter", "ml");
        self.alias("milliliters", "ml");
        self.alias("l", "liter");
        self.alias("liters", "liter");
        self.alias("litre", "liter");
        self.alias("litres", "liter");
        self.alias("gal", "gallon");
        self.alias("qt", "quart");

        // Weight
        self.alias("ounce", "oz");
        self.alias("ounces", "oz");
        self.alias("pound", "lb");
        self.alias("pounds", "lb");
        self.alias("lbs", "lb");
        self.alias("gram", "g");
        self.alias("grams", "g");
        self.alias("kilogram", "kg");
        self.alias("kilograms", "kg");
        self.alias("tonne", "ton");

        // Temperature
        self.alias("fahrenheit", "f");
        self.alias("celsius", "c");
        self.alias("°f", "f");
        self.alias("°c", "c");

        // Length
        self.alias("in", "inch");
        self.alias("inches", "inch");
        self.alias("foot", "ft");
        self.alias("feet", "ft");
        self.alias("yd", "yard");
        self.alias("yards", "yard");
        self.alias("mi", "mile");
        self.alias("miles", "mile");
        self.alias("meter", "m");
        self.alias("meters", "m");
        self.alias("metre", "m");
        self.alias("centimeter", "cm");
        self.alias("centimeters", "cm");
        self.alias("millimeter", "mm");
        self.alias("millimeters", "mm");
        self.alias("kilometer", "km");
        self.alias("kilometers", "km");

        // Area
        self.alias("ha", "hectare");
        self.alias("acres", "acre");

        // Speed
        self.alias("kph", "kmh");
        self.alias("knots", "knot");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_declaration_order() {
        assert_eq!(UNITS.categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_units_in_declaration_order() {
        let volume = UNITS.units_in(Category::Volume);
        assert_eq!(volume.first().map(|u| u.key), Some("tsp"));
        assert_eq!(volume.last().map(|u| u.key), Some("kg"));
        assert_eq!(volume.len(), 11);

        let speed = UNITS.units_in(Category::Speed);
        let keys: Vec<_> = speed.iter().map(|u| u.key).collect();
        assert_eq!(keys, vec!["mph", "fps", "kmh", "ms", "knot"]);
    }

    #[test]
    fn test_get_by_key() {
        let tsp = UNITS.get("tsp").unwrap();
        assert_eq!(tsp.category, Category::Volume);
        assert_eq!(tsp.factor, 4.93);
    }

    #[test]
    fn test_get_by_alias() {
        assert_eq!(UNITS.get("teaspoon").unwrap().key, "tsp");
        assert_eq!(UNITS.get("pounds").unwrap().key, "lb");
        assert_eq!(UNITS.get("fahrenheit").unwrap().key, "f");
    }

    #[test]
    fn test_get_unknown() {
        assert!(UNITS.get("furlong").is_none());
        assert!(UNITS.get("").is_none());
    }

    #[test]
    fn test_reused_key_resolves_declaration_order() {
        // "g" exists in volume (water density) and weight; volume registers first
        assert_eq!(UNITS.get("g").unwrap().category, Category::Volume);
        assert_eq!(UNITS.get_in(Category::Weight, "g").unwrap().category, Category::Weight);
    }

    #[test]
    fn test_resolve_pair_same_category() {
        let (from, to) = UNITS.resolve_pair("cup", "g").unwrap();
        assert_eq!(from.category, Category::Volume);
        assert_eq!(to.category, Category::Volume);

        let (from, to) = UNITS.resolve_pair("oz", "g").unwrap();
        assert_eq!(from.category, Category::Weight);
        assert_eq!(to.category, Category::Weight);
    }

    #[test]
    fn test_resolve_pair_cross_category() {
        assert!(UNITS.resolve_pair("tsp", "lb").is_none());
        assert!(UNITS.resolve_pair("f", "km").is_none());
    }

    #[test]
    fn test_resolve_pair_aliases() {
        let (from, to) = UNITS.resolve_pair("teaspoons", "tablespoons").unwrap();
        assert_eq!(from.key, "tsp");
        assert_eq!(to.key, "tbsp");
    }

    #[test]
    fn test_keys_cover_all_tables() {
        let keys = UNITS.keys();
        assert_eq!(keys.len(), 11 + 5 + 2 + 8 + 8 + 5);
        assert_eq!(keys.first(), Some(&"tsp"));
    }
}
