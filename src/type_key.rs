use std::any::{self, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies a destination type in the registry.
///
/// Equality and hashing go through [`TypeId`], so distinct types never share a
/// key. The fully-qualified type name rides along for display only.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    type_name: &'static str,
}

impl TypeKey {
    /// Key for the type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
        }
    }

    /// Key for the type behind a reference. `&T`, `&mut T` and `T` all resolve to `T`.
    ///
    /// Only sized values are accepted; a `&dyn Any` would otherwise yield the
    /// key of `dyn Any` rather than of the value inside.
    pub fn of_val<T: 'static>(_value: &T) -> Self {
        Self::of::<T>()
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Full type name, e.g. `alloc::string::String`
    pub fn as_str(&self) -> &'static str {
        self.type_name
    }

    /// Module path the type is defined in. Empty for primitives such as `i32`.
    pub fn namespace(&self) -> &'static str {
        match self.split() {
            Some((namespace, _)) => namespace,
            None => "",
        }
    }

    /// Simple name without the module path, generic arguments included.
    pub fn name(&self) -> &'static str {
        match self.split() {
            Some((_, name)) => name,
            None => self.type_name,
        }
    }

    // Generic arguments carry their own paths, so only look for the last
    // separator before the first `<`.
    fn split(&self) -> Option<(&'static str, &'static str)> {
        let head_end = self.type_name.find('<').unwrap_or(self.type_name.len());
        let sep = self.type_name[..head_end].rfind("::")?;
        Some((&self.type_name[..sep], &self.type_name[sep + 2..]))
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name)
    }
}
