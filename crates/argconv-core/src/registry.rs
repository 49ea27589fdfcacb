//! Type registry
//!
//! Maps textual type names, as they appear in a command-line definition, to
//! [`TargetType`] descriptors.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::target::{BuiltinKind, Convertible, TargetType};

/// Java-style spellings accepted for each built-in kind.
const BUILTIN_ALIASES: &[(BuiltinKind, &[&str])] = &[
    (BuiltinKind::Text, &["string"]),
    (BuiltinKind::Boolean, &["boolean", "Boolean"]),
    (BuiltinKind::Int8, &["byte", "Byte"]),
    (BuiltinKind::Int16, &["short", "Short"]),
    (BuiltinKind::Int32, &["int", "Integer"]),
    (BuiltinKind::Int64, &["long", "Long"]),
    (BuiltinKind::Float32, &["float", "Float"]),
    (BuiltinKind::Float64, &["double", "Double"]),
];

/// Registry mapping type names to target type descriptors.
///
/// # Example
///
/// ```
/// use argconv_core::{TargetType, TypeRegistry};
///
/// let registry = TypeRegistry::with_builtins();
/// assert_eq!(registry.get("int").map(TargetType::name), Some("i32"));
/// assert!(registry.get("Uuid").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TargetType>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Create a registry with every built-in kind registered under its
    /// Rust name and its Java-style aliases.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (kind, aliases) in BUILTIN_ALIASES {
            registry.register(kind.rust_name(), TargetType::builtin(*kind));
            for alias in *aliases {
                registry.register(*alias, TargetType::builtin(*kind));
            }
        }
        registry
    }

    /// Register a descriptor under a name.
    ///
    /// If the name was already registered, the previous descriptor is
    /// replaced.
    pub fn register(&mut self, name: impl Into<String>, target: TargetType) {
        self.types.insert(name.into(), target);
    }

    /// Register a [`Convertible`] type under its descriptor's display name.
    pub fn register_type<T: Convertible>(&mut self) {
        let target = T::target_type();
        self.types.insert(target.name().to_string(), target);
    }

    /// Register `alias` as another name for `existing`.
    ///
    /// Returns [`Error::UnknownType`] if `existing` is not registered.
    pub fn alias(&mut self, alias: impl Into<String>, existing: &str) -> Result<()> {
        let target = self.resolve(existing)?.clone();
        self.types.insert(alias.into(), target);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TargetType> {
        self.types.get(name)
    }

    /// Look up a descriptor, failing with [`Error::UnknownType`].
    pub fn resolve(&self, name: &str) -> Result<&TargetType> {
        self.types.get(name).ok_or_else(|| Error::UnknownType {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// List all registered names, sorted.
    pub fn list_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
