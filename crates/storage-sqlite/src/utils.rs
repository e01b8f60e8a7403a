//! Small conversion helpers shared by the repository models.

use inmoflow_core::errors::{Error, ValidationError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a closed-enum text column, surfacing unknown values as validation
/// errors instead of silently defaulting.
pub(crate) fn parse_enum<T: FromStr<Err = String>>(value: &str) -> inmoflow_core::Result<T> {
    value
        .parse::<T>()
        .map_err(|e| Error::Validation(ValidationError::InvalidInput(e)))
}

/// Parses an optional text column into a Decimal, treating unparseable
/// content as absent.
pub(crate) fn decimal_from_text(value: Option<String>) -> Option<Decimal> {
    value.and_then(|s| Decimal::from_str(s.trim()).ok())
}

/// Serializes an optional Decimal into its text column form.
pub(crate) fn decimal_to_text(value: Option<Decimal>) -> Option<String> {
    value.map(|d| d.to_string())
}
