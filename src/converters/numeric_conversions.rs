//! Numeric conversion functions
//!
//! Integers are parsed at 64 bits and floats at double precision, then
//! narrowed to the destination width according to [`Narrowing`].

use std::any;

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// How a value parsed at 64 bits is squeezed into a narrower destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Narrowing {
    /// Plain `as` casts: integers wrap, `f64 -> f32` rounds and may become infinite.
    #[default]
    Truncate,
    /// Values that do not fit the destination fail with [`ConversionError::OutOfRange`].
    Checked,
}

/// Narrowing from the 64-bit intermediate `W` into `Self`.
pub trait NarrowFrom<W>: Sized {
    fn truncate(wide: W) -> Self;
    fn checked(wide: W) -> Option<Self>;
}

macro_rules! narrow_int {
    ($wide:ty => $($target:ty),+) => {
        $(
            impl NarrowFrom<$wide> for $target {
                fn truncate(wide: $wide) -> Self {
                    wide as $target
                }

                fn checked(wide: $wide) -> Option<Self> {
                    <$target>::try_from(wide).ok()
                }
            }
        )+
    };
}

narrow_int!(i64 => i8, i16, i32, i64, isize);
narrow_int!(u64 => u8, u16, u32, u64, usize);

impl NarrowFrom<f64> for f64 {
    fn truncate(wide: f64) -> Self {
        wide
    }

    fn checked(wide: f64) -> Option<Self> {
        Some(wide)
    }
}

impl NarrowFrom<f64> for f32 {
    fn truncate(wide: f64) -> Self {
        wide as f32
    }

    fn checked(wide: f64) -> Option<Self> {
        let narrow = wide as f32;
        if wide.is_finite() && narrow.is_infinite() {
            None
        } else {
            Some(narrow)
        }
    }
}

/// Narrow `wide` into `T`. `value` is the source text, quoted in range errors.
pub fn narrow<W, T>(wide: W, value: &str, narrowing: Narrowing) -> Result<T, ConversionError>
where
    T: NarrowFrom<W>,
{
    match narrowing {
        Narrowing::Truncate => Ok(T::truncate(wide)),
        Narrowing::Checked => T::checked(wide).ok_or_else(|| ConversionError::OutOfRange {
            value: value.to_string(),
            target: any::type_name::<T>(),
        }),
    }
}

/// Convert string to signed 64-bit integer (base 10)
pub fn string_to_i64(value: &str) -> Result<i64, ConversionError> {
    value
        .parse::<i64>()
        .map_err(|source| ConversionError::InvalidInteger {
            value: value.to_string(),
            source,
        })
}

/// Convert string to unsigned 64-bit integer (base 10, digits only)
pub fn string_to_u64(value: &str) -> Result<u64, ConversionError> {
    // `u64::from_str` takes a leading `+`
    if value.starts_with('+') {
        return Err(ConversionError::UnsignedSign(value.to_string()));
    }
    value
        .parse::<u64>()
        .map_err(|source| ConversionError::InvalidUnsigned {
            value: value.to_string(),
            source,
        })
}

/// Convert string to double precision float.
///
/// Finite literals too large for `f64` are rejected rather than silently
/// turned into infinity; `inf`/`infinity` spelled out are accepted.
/// Only decimal notation is understood: hexadecimal floats such as `0x1p-2`
/// are rejected as invalid.
pub fn string_to_f64(value: &str) -> Result<f64, ConversionError> {
    let parsed = value
        .parse::<f64>()
        .map_err(|source| ConversionError::InvalidFloat {
            value: value.to_string(),
            source,
        })?;
    if parsed.is_infinite() && !is_infinity_literal(value) {
        return Err(ConversionError::FloatOutOfRange(value.to_string()));
    }
    Ok(parsed)
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
