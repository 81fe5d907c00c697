//! String conversion functions

use crate::error::ConversionError;

/// Convert string to string (identity conversion)
pub fn string_to_string(value: &str) -> Result<String, ConversionError> {
    Ok(value.to_string())
}
