//! Per-category converter configuration
//!
//! The static table the presentation layer reads: titles, descriptions,
//! the default unit pair, and the default quantity `clear()` restores.

use misura_units::{Category, UNITS};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Configuration for one converter panel
#[derive(Debug, Clone, Serialize)]
pub struct ConverterConfig {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub default_from: &'static str,
    pub default_to: &'static str,
    /// Quantity restored by `clear()`
    pub default_quantity: &'static str,
}

/// Converter panels in display order
pub static CONFIGS: [ConverterConfig; 6] = [
    ConverterConfig {
        category: Category::Volume,
        title: "Volume Converter",
        description: "Convert between common kitchen volume measurements",
        default_from: "tsp",
        default_to: "tbsp",
        default_quantity: "1",
    },
    ConverterConfig {
        category: Category::Weight,
        title: "Weight Converter",
        description: "Convert between common kitchen weight measurements",
        default_from: "oz",
        default_to: "lb",
        default_quantity: "1",
    },
    ConverterConfig {
        category: Category::Temperature,
        title: "Temperature Converter",
        description: "Convert between Fahrenheit and Celsius",
        default_from: "f",
        default_to: "c",
        default_quantity: "70",
    },
    ConverterConfig {
        category: Category::Length,
        title: "Length Converter",
        description: "Convert between common length measurements",
        default_from: "inch",
        default_to: "cm",
        default_quantity: "1",
    },
    ConverterConfig {
        category: Category::Area,
        title: "Area Converter",
        description: "Convert between common area measurements",
        default_from: "sqft",
        default_to: "sqm",
        default_quantity: "1",
    },
    ConverterConfig {
        category: Category::Speed,
        title: "Speed Converter",
        description: "Convert between common speed measurements",
        default_from: "mph",
        default_to: "kmh",
        default_quantity: "1",
    },
];

/// Look up the configuration for a category
pub fn config_for(category: Category) -> &'static ConverterConfig {
    match category {
        Category::Volume => &CONFIGS[0],
        Category::Weight => &CONFIGS[1],
        Category::Temperature => &CONFIGS[2],
        Category::Length => &CONFIGS[3],
        Category::Area => &CONFIGS[4],
        Category::Speed => &CONFIGS[5],
    }
}

/// The static configuration table in its wire shape:
/// `{category: {units: [{key, label, factor}], ruleKind: ...}}`
pub fn table_json() -> Value {
    let mut table = Map::new();
    for config in &CONFIGS {
        let units: Vec<Value> = UNITS
            .units_in(config.category)
            .iter()
            .map(|u| json!({ "key": u.key, "label": u.label, "factor": u.factor }))
            .collect();
        table.insert(
            config.category.name().to_string(),
            json!({ "units": units, "ruleKind": config.category.rule() }),
        );
    }
    Value::Object(table)
}
