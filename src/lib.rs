//! ox_parse_register - A type-keyed registry of string parsers
//!
//! Callers register, per destination type, a function that parses text into
//! that type. Binders and config loaders then hand any `&mut T` plus a source
//! string to [`Registry::set_value`], which finds the converter for `T` and
//! writes the parsed value in place.
//!
//! ```
//! use ox_parse_register::{primitives, ConversionError};
//!
//! struct Endpoint {
//!     host: String,
//!     port: u16,
//! }
//!
//! let mut registry = primitives();
//! registry.register(|dst: &mut Endpoint, value: &str| {
//!     let (host, port) = value
//!         .split_once(':')
//!         .ok_or_else(|| ConversionError::custom("expected host:port"))?;
//!     dst.host = host.to_string();
//!     dst.port = port.parse::<u16>().map_err(ConversionError::other)?;
//!     Ok(())
//! });
//!
//! let mut endpoint = Endpoint { host: String::new(), port: 0 };
//! assert!(registry.set_value(&mut endpoint, "localhost:8080").unwrap());
//! assert_eq!(endpoint.host, "localhost");
//! assert_eq!(endpoint.port, 8080);
//! ```

pub mod converters;
pub mod error;
pub mod registry;
pub mod type_key;

pub use converters::{primitives, register_primitives, Narrowing, Primitives, PRIMITIVES};
pub use error::ConversionError;
pub use registry::{Registry, SetValueFn, ValueSetter};
pub use type_key::TypeKey;

// Re-export commonly used types
pub use std::any::Any;
