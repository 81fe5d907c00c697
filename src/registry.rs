use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

use crate::error::ConversionError;
use crate::type_key::TypeKey;

/// Type-erased converter as stored in the registry.
///
/// The `&mut dyn Any` handed in is always of the type the converter was
/// registered under, so a plain `downcast_mut` is enough to reach it.
pub type SetValueFn =
    Box<dyn Fn(&mut dyn Any, &str) -> Result<(), ConversionError> + Send + Sync + 'static>;

/// Object-safe dispatch surface, for binders that should not care which
/// registry (or wrapper around one) they are fed.
pub trait ValueSetter {
    /// Parse `value` into `dst` with the converter registered for its type.
    ///
    /// # Returns
    /// * `Ok(true)` - A converter ran and `dst` now holds the parsed value.
    /// * `Ok(false)` - No converter is registered for the type; `dst` is untouched.
    /// * `Err(ConversionError)` - A converter ran and rejected `value`.
    fn set_value_any(&self, dst: &mut dyn Any, value: &str) -> Result<bool, ConversionError>;

    /// Whether a converter is registered for the type of `sample`.
    fn is_supported_any(&self, sample: &dyn Any) -> bool;
}

struct Entry {
    key: TypeKey,
    setter: SetValueFn,
}

/// Registry linking destination types to their string converters
#[derive(Default)]
pub struct Registry {
    setters: HashMap<TypeId, Entry>,
}

impl Registry {
    /// Create a new empty registry. It recognizes no types until converters are registered.
    pub fn new() -> Self {
        Self {
            setters: HashMap::new(),
        }
    }

    /// Register a converter for `T`, replacing any converter already registered for it.
    ///
    /// Returns the registry so registrations can be chained.
    pub fn register<T, F>(&mut self, setter: F) -> &mut Self
    where
        T: Any,
        F: Fn(&mut T, &str) -> Result<(), ConversionError> + Send + Sync + 'static,
    {
        self.register_erased(TypeKey::of::<T>(), erase(setter))
    }

    /// Register an already type-erased converter under `key`.
    pub fn register_erased(&mut self, key: TypeKey, setter: SetValueFn) -> &mut Self {
        if self
            .setters
            .insert(key.type_id(), Entry { key, setter })
            .is_some()
        {
            debug!("Replaced converter for {}", key);
        } else {
            trace!("Registered converter for {}", key);
        }
        self
    }

    /// Parse `value` into `dst` using the converter registered for `T`.
    ///
    /// Unsupported types are not an error: they report `Ok(false)` and leave `dst`
    /// alone, so callers can fall back to something else. Converter errors are
    /// returned as-is. After an error the contents of `dst` are whatever the
    /// converter left there; the built-in converters never write on failure.
    pub fn set_value<T: Any>(&self, dst: &mut T, value: &str) -> Result<bool, ConversionError> {
        self.set_value_any(dst, value)
    }

    /// Type-erased form of [`Registry::set_value`].
    pub fn set_value_any(&self, dst: &mut dyn Any, value: &str) -> Result<bool, ConversionError> {
        let Some(entry) = self.setters.get(&Any::type_id(&*dst)) else {
            trace!("No converter registered for destination");
            return Ok(false);
        };
        trace!("Dispatching to converter for {}", entry.key);
        (entry.setter)(dst, value)?;
        Ok(true)
    }

    /// Whether a converter is registered for the type of `sample`. Only needs a shared reference.
    ///
    /// `T` is the static type, so type-erased values go through
    /// [`Registry::is_supported_any`] instead:
    ///
    /// ```compile_fail
    /// use std::any::Any;
    /// let registry = ox_parse_register::primitives();
    /// let field: &dyn Any = &0u8;
    /// registry.is_supported(field);
    /// ```
    pub fn is_supported<T: Any>(&self, _sample: &T) -> bool {
        self.supports::<T>()
    }

    /// Type-erased form of [`Registry::is_supported`].
    pub fn is_supported_any(&self, sample: &dyn Any) -> bool {
        self.setters.contains_key(&Any::type_id(sample))
    }

    /// Whether a converter is registered for `T`
    pub fn supports<T: Any>(&self) -> bool {
        self.supports_key(&TypeKey::of::<T>())
    }

    pub fn supports_key(&self, key: &TypeKey) -> bool {
        self.setters.contains_key(&key.type_id())
    }

    /// Get all registered destination types
    pub fn registered_types(&self) -> Vec<TypeKey> {
        self.setters.values().map(|entry| entry.key).collect()
    }

    pub fn len(&self) -> usize {
        self.setters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }
}

// Wraps a typed converter so it can be stored behind `SetValueFn`. The registry
// only hands it destinations of type `T`; anything else is reported, not written.
fn erase<T, F>(setter: F) -> SetValueFn
where
    T: Any,
    F: Fn(&mut T, &str) -> Result<(), ConversionError> + Send + Sync + 'static,
{
    Box::new(move |dst: &mut dyn Any, value: &str| match dst.downcast_mut::<T>() {
        Some(dst) => setter(dst, value),
        None => Err(ConversionError::custom(format!(
            "converter for {} called with another destination type",
            TypeKey::of::<T>()
        ))),
    })
}

impl ValueSetter for Registry {
    fn set_value_any(&self, dst: &mut dyn Any, value: &str) -> Result<bool, ConversionError> {
        Registry::set_value_any(self, dst, value)
    }

    fn is_supported_any(&self, sample: &dyn Any) -> bool {
        Registry::is_supported_any(self, sample)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.setters.values().map(|entry| entry.key.as_str()).collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("types", &names).finish()
    }
}
