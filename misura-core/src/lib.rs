//! Misura Core - Fundamental types
//!
//! This crate provides the shared pieces of the measurement converter:
//! - `ConversionError`: typed failures for lookups and conversions
//! - `parse_loose`: UI-grade numeric parsing (bad input reads as zero)
//! - `format_result`: magnitude-dependent fixed-decimal display

mod error;
mod number;

pub use error::ConversionError;
pub use number::{format_result, parse_loose, try_parse_loose};
