//! Quantity and conversion-spec string parsing
//!
//! Parses "3 tsp" / "70f" quantity strings and "tsp->tbsp" / "oz to lb"
//! conversion specs against the registry. Unit tokens are matched
//! case-insensitively through the alias table.

use misura_core::ConversionError;

use crate::quantity::Quantity;
use crate::registry::UNITS;
use crate::unit::UnitDef;

/// Parse a quantity string like "3 tsp", "70f", or "1.5 cup"
pub fn parse_quantity(s: &str) -> Result<Quantity, ConversionError> {
    let s = s.trim();

    // Find where the number ends and the unit begins
    let mut split_pos = 0;
    let mut found_digit = false;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E') {
            found_digit = true;
            split_pos = i + c.len_utf8();
        } else {
            break;
        }
    }

    if !found_digit {
        return Err(ConversionError::InvalidQuantity(s.to_string()));
    }

    let num_str = &s[..split_pos];
    let unit_str = s[split_pos..].trim();

    let value: f64 = num_str
        .parse()
        .map_err(|_| ConversionError::InvalidQuantity(num_str.to_string()))?;

    if unit_str.is_empty() {
        return Err(ConversionError::InvalidQuantity(s.to_string()));
    }

    let unit = lookup(unit_str)?;
    Ok(Quantity::new(value, unit))
}

/// Parse a conversion spec like "tsp->tbsp", "f → c", or "oz to lb"
pub fn parse_conversion(s: &str) -> Result<(&'static UnitDef, &'static UnitDef), ConversionError> {
    let parts: Vec<&str> = if s.contains("->") {
        s.splitn(2, "->").collect()
    } else if s.contains('→') {
        s.splitn(2, '→').collect()
    } else if s.contains(" to ") {
        s.splitn(2, " to ").collect()
    } else {
        return Err(ConversionError::InvalidQuantity(format!(
            "invalid conversion spec: {}, expected 'from->to'",
            s
        )));
    };

    let from = lookup(parts[0])?;
    let to = lookup(parts[1])?;

    // Re-resolve as a pair so reused keys land in one shared category
    UNITS
        .resolve_pair(from.key, to.key)
        .ok_or_else(|| ConversionError::IncompatibleCategories {
            from: from.key.to_string(),
            from_category: from.category.name().to_string(),
            to: to.key.to_string(),
            to_category: to.category.name().to_string(),
        })
}

fn lookup(token: &str) -> Result<&'static UnitDef, ConversionError> {
    let key = token.trim().to_lowercase();
    UNITS
        .get(&key)
        .ok_or_else(|| ConversionError::UnknownUnit(token.trim().to_string()))
}
