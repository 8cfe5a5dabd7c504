//! Conversion error taxonomy
//!
//! Errors are values that propagate through the typed API. The display
//! pipeline recovers all of them into the "0" sentinel, so no failure in
//! this crate family is ever fatal to a UI.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for registry lookups and conversions
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConversionError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("cannot convert {from} ({from_category}) to {to} ({to_category}): incompatible categories")]
    IncompatibleCategories {
        from: String,
        from_category: String,
        to: String,
        to_category: String,
    },

    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}
