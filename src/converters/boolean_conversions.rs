//! Boolean conversion functions

use crate::error::ConversionError;

/// Convert string to boolean.
///
/// Case-sensitive. `t`, `true` and `yes` are true; `f`, `false`, `no` and the
/// empty string are false. Anything else is rejected.
pub fn string_to_boolean(value: &str) -> Result<bool, ConversionError> {
    match value {
        "t" | "true" | "yes" => Ok(true),
        "" | "f" | "false" | "no" => Ok(false),
        _ => Err(ConversionError::InvalidBoolean),
    }
}
