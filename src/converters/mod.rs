//! Built-in converters
//!
//! Each file holds the parsing functions for one family of types. This module
//! wires them into a [`Registry`] as the primitive converter set.

pub mod boolean_conversions;
pub mod datetime_conversions;
pub mod duration_conversions;
pub mod numeric_conversions;
pub mod string_conversions;

pub use boolean_conversions::*;
pub use datetime_conversions::*;
pub use duration_conversions::*;
pub use numeric_conversions::*;
pub use string_conversions::*;

use std::any::Any;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};
use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConversionError;
use crate::registry::Registry;

lazy_static! {
    /// Shared registry holding the default primitive converters.
    ///
    /// It is immutable; to add or override converters start from [`primitives()`] instead.
    pub static ref PRIMITIVES: Registry = primitives();
}

/// Installer for the primitive converter set:
/// `bool`, `String`, `i8`..`i64`, `isize`, `u8`..`u64`, `usize`, `f32`, `f64`,
/// `std::time::Duration`, `chrono::Duration` and RFC 3339 `chrono::DateTime`s.
///
/// Any of them can be overridden afterwards by registering the same type again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Primitives {
    narrowing: Narrowing,
}

impl Primitives {
    /// Creates a new `Primitives` with default settings:
    /// - `narrowing`: [`Narrowing::Truncate`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how 64-bit intermediates are narrowed into smaller destinations.
    pub fn with_narrowing(mut self, narrowing: Narrowing) -> Self {
        self.narrowing = narrowing;
        self
    }

    pub fn narrowing(&self) -> Narrowing {
        self.narrowing
    }

    /// Register the primitive converters into `registry`, replacing existing
    /// converters for the same types.
    pub fn register_into<'r>(&self, registry: &'r mut Registry) -> &'r mut Registry {
        let narrowing = self.narrowing;

        registry
            .register(|dst: &mut String, value: &str| {
                *dst = string_to_string(value)?;
                Ok(())
            })
            .register(|dst: &mut bool, value: &str| {
                *dst = string_to_boolean(value)?;
                Ok(())
            });

        register_signed::<i8>(registry, narrowing);
        register_signed::<i16>(registry, narrowing);
        register_signed::<i32>(registry, narrowing);
        register_signed::<i64>(registry, narrowing);
        register_signed::<isize>(registry, narrowing);

        register_unsigned::<u8>(registry, narrowing);
        register_unsigned::<u16>(registry, narrowing);
        register_unsigned::<u32>(registry, narrowing);
        register_unsigned::<u64>(registry, narrowing);
        register_unsigned::<usize>(registry, narrowing);

        register_float::<f32>(registry, narrowing);
        register_float::<f64>(registry, narrowing);

        registry
            .register(|dst: &mut Duration, value: &str| {
                *dst = string_to_duration(value)?;
                Ok(())
            })
            .register(|dst: &mut chrono::Duration, value: &str| {
                *dst = string_to_time_delta(value)?;
                Ok(())
            })
            .register(|dst: &mut DateTime<FixedOffset>, value: &str| {
                *dst = string_to_datetime(value)?;
                Ok(())
            })
            .register(|dst: &mut DateTime<Utc>, value: &str| {
                *dst = string_to_utc_datetime(value)?;
                Ok(())
            });

        debug!(
            "Installed primitive converters ({:?} narrowing), registry now holds {} types",
            narrowing,
            registry.len()
        );
        registry
    }

    /// Build a fresh registry holding only the primitive converters.
    pub fn build(&self) -> Registry {
        let mut registry = Registry::new();
        self.register_into(&mut registry);
        registry
    }
}

/// Registers the primitive converters with default settings into `registry`.
///
/// Returns the registry so further registrations can be chained.
pub fn register_primitives(registry: &mut Registry) -> &mut Registry {
    Primitives::new().register_into(registry)
}

/// Creates a new registry with the primitive converters. Every call builds an
/// independent instance.
pub fn primitives() -> Registry {
    Primitives::new().build()
}

fn register_signed<T>(registry: &mut Registry, narrowing: Narrowing)
where
    T: NarrowFrom<i64> + Any,
{
    registry.register(move |dst: &mut T, value: &str| -> Result<(), ConversionError> {
        *dst = narrow(string_to_i64(value)?, value, narrowing)?;
        Ok(())
    });
}

fn register_unsigned<T>(registry: &mut Registry, narrowing: Narrowing)
where
    T: NarrowFrom<u64> + Any,
{
    registry.register(move |dst: &mut T, value: &str| -> Result<(), ConversionError> {
        *dst = narrow(string_to_u64(value)?, value, narrowing)?;
        Ok(())
    });
}

fn register_float<T>(registry: &mut Registry, narrowing: Narrowing)
where
    T: NarrowFrom<f64> + Any,
{
    registry.register(move |dst: &mut T, value: &str| -> Result<(), ConversionError> {
        *dst = narrow(string_to_f64(value)?, value, narrowing)?;
        Ok(())
    });
}
