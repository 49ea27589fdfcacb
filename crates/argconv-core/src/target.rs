//! Target type descriptors
//!
//! A [`TargetType`] describes the destination type of a conversion: its
//! display name, the Rust type it produces, and which conversion
//! capabilities it declares. Capabilities are registered explicitly by the
//! host, either through the builder methods here or by implementing
//! [`Convertible`].

use std::any::{Any, TypeId};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::BoxError;
use crate::value::Value;

type FactoryFn = dyn Fn(&str) -> std::result::Result<Value, BoxError> + Send + Sync;

/// The closed set of kinds handled by the built-in strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    Text,
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl BuiltinKind {
    /// All built-in kinds, in declaration order.
    pub const ALL: [BuiltinKind; 8] = [
        BuiltinKind::Text,
        BuiltinKind::Boolean,
        BuiltinKind::Int8,
        BuiltinKind::Int16,
        BuiltinKind::Int32,
        BuiltinKind::Int64,
        BuiltinKind::Float32,
        BuiltinKind::Float64,
    ];

    /// The Rust type name this kind produces.
    pub fn rust_name(&self) -> &'static str {
        match self {
            BuiltinKind::Text => "String",
            BuiltinKind::Boolean => "bool",
            BuiltinKind::Int8 => "i8",
            BuiltinKind::Int16 => "i16",
            BuiltinKind::Int32 => "i32",
            BuiltinKind::Int64 => "i64",
            BuiltinKind::Float32 => "f32",
            BuiltinKind::Float64 => "f64",
        }
    }

    pub fn type_id(&self) -> TypeId {
        match self {
            BuiltinKind::Text => TypeId::of::<String>(),
            BuiltinKind::Boolean => TypeId::of::<bool>(),
            BuiltinKind::Int8 => TypeId::of::<i8>(),
            BuiltinKind::Int16 => TypeId::of::<i16>(),
            BuiltinKind::Int32 => TypeId::of::<i32>(),
            BuiltinKind::Int64 => TypeId::of::<i64>(),
            BuiltinKind::Float32 => TypeId::of::<f32>(),
            BuiltinKind::Float64 => TypeId::of::<f64>(),
        }
    }
}

impl fmt::Display for BuiltinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name())
    }
}

/// A registered conversion callable together with its declared return type.
#[derive(Clone)]
pub struct Factory {
    returns: TypeId,
    returns_name: &'static str,
    func: Arc<FactoryFn>,
}

impl Factory {
    /// Create a factory declared to return `T`.
    ///
    /// The callable's result is wrapped with [`Value::custom`], so built-in
    /// return types come back as their native variant.
    pub fn new<T, F, E>(func: F) -> Self
    where
        T: Any + fmt::Debug + PartialEq + Send + Sync,
        F: Fn(&str) -> std::result::Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self {
            returns: TypeId::of::<T>(),
            returns_name: std::any::type_name::<T>(),
            func: Arc::new(move |raw: &str| func(raw).map(Value::custom).map_err(Into::into)),
        }
    }

    /// Create a factory from a callable that already produces a [`Value`],
    /// declaring `T` as its return type.
    pub fn from_value_fn<T, F>(func: F) -> Self
    where
        T: Any,
        F: Fn(&str) -> std::result::Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self {
            returns: TypeId::of::<T>(),
            returns_name: std::any::type_name::<T>(),
            func: Arc::new(func),
        }
    }

    /// The declared return type.
    pub fn returns(&self) -> TypeId {
        self.returns
    }

    pub fn returns_name(&self) -> &'static str {
        self.returns_name
    }

    /// Whether the declared return type can stand in for `target`.
    pub fn is_assignable_to(&self, target: &TargetType) -> bool {
        self.returns == target.type_id()
    }

    /// Invoke the callable.
    pub fn invoke(&self, raw: &str) -> std::result::Result<Value, BoxError> {
        (self.func)(raw)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("returns", &self.returns_name)
            .finish_non_exhaustive()
    }
}

/// Descriptor of a conversion destination.
///
/// # Example
///
/// ```
/// use argconv_core::TargetType;
///
/// #[derive(Debug, PartialEq)]
/// struct Level(u8);
///
/// let target = TargetType::new::<Level>("Level")
///     .with_constructor(|raw: &str| raw.parse::<u8>().map(Level));
/// assert!(target.has_constructor());
/// assert!(!target.has_from_string());
/// ```
#[derive(Debug, Clone)]
pub struct TargetType {
    name: String,
    type_id: TypeId,
    builtin: Option<BuiltinKind>,
    from_string: Option<Factory>,
    value_of: Option<Factory>,
    constructor: Option<Factory>,
}

impl TargetType {
    /// Describe host type `T` with no capabilities yet.
    pub fn new<T: Any>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_id: TypeId::of::<T>(),
            builtin: None,
            from_string: None,
            value_of: None,
            constructor: None,
        }
    }

    /// Describe one of the built-in kinds.
    pub fn builtin(kind: BuiltinKind) -> Self {
        Self {
            name: kind.rust_name().to_string(),
            type_id: kind.type_id(),
            builtin: Some(kind),
            from_string: None,
            value_of: None,
            constructor: None,
        }
    }

    pub fn string() -> Self {
        Self::builtin(BuiltinKind::Text)
    }

    pub fn boolean() -> Self {
        Self::builtin(BuiltinKind::Boolean)
    }

    pub fn int8() -> Self {
        Self::builtin(BuiltinKind::Int8)
    }

    pub fn int16() -> Self {
        Self::builtin(BuiltinKind::Int16)
    }

    pub fn int32() -> Self {
        Self::builtin(BuiltinKind::Int32)
    }

    pub fn int64() -> Self {
        Self::builtin(BuiltinKind::Int64)
    }

    pub fn float32() -> Self {
        Self::builtin(BuiltinKind::Float32)
    }

    pub fn float64() -> Self {
        Self::builtin(BuiltinKind::Float64)
    }

    /// Register a static `fromString` factory.
    pub fn with_from_string<T, F, E>(self, func: F) -> Self
    where
        T: Any + fmt::Debug + PartialEq + Send + Sync,
        F: Fn(&str) -> std::result::Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.with_from_string_factory(Factory::new(func))
    }

    /// Register a static `valueOf` factory.
    pub fn with_value_of<T, F, E>(self, func: F) -> Self
    where
        T: Any + fmt::Debug + PartialEq + Send + Sync,
        F: Fn(&str) -> std::result::Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.with_value_of_factory(Factory::new(func))
    }

    /// Register a single-string-argument constructor.
    pub fn with_constructor<T, F, E>(self, func: F) -> Self
    where
        T: Any + fmt::Debug + PartialEq + Send + Sync,
        F: Fn(&str) -> std::result::Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.with_constructor_factory(Factory::new(func))
    }

    /// Register a `valueOf` factory backed by `T`'s [`FromStr`] impl.
    pub fn with_from_str<T>(self) -> Self
    where
        T: FromStr + Any + fmt::Debug + PartialEq + Send + Sync,
        T::Err: Into<BoxError>,
    {
        self.with_value_of(|raw: &str| raw.parse::<T>())
    }

    pub fn with_from_string_factory(mut self, factory: Factory) -> Self {
        self.from_string = Some(factory);
        self
    }

    pub fn with_value_of_factory(mut self, factory: Factory) -> Self {
        self.value_of = Some(factory);
        self
    }

    pub fn with_constructor_factory(mut self, factory: Factory) -> Self {
        self.constructor = Some(factory);
        self
    }

    /// Display name used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn builtin_kind(&self) -> Option<BuiltinKind> {
        self.builtin
    }

    pub fn from_string(&self) -> Option<&Factory> {
        self.from_string.as_ref()
    }

    pub fn value_of(&self) -> Option<&Factory> {
        self.value_of.as_ref()
    }

    pub fn constructor(&self) -> Option<&Factory> {
        self.constructor.as_ref()
    }

    pub fn has_from_string(&self) -> bool {
        self.from_string.is_some()
    }

    pub fn has_value_of(&self) -> bool {
        self.value_of.is_some()
    }

    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Compile-time registration of a host type's conversion capabilities.
///
/// ```
/// use argconv_core::{Convertible, Converter, TargetType};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Celsius(f64);
///
/// impl Convertible for Celsius {
///     fn target_type() -> TargetType {
///         TargetType::new::<Celsius>("Celsius")
///             .with_from_string(|raw: &str| raw.trim_end_matches('C').parse().map(Celsius))
///     }
/// }
///
/// let converter = Converter::new();
/// let temp: Celsius = converter.convert_type("--temp", "21.5C").unwrap();
/// assert_eq!(temp, Celsius(21.5));
/// ```
pub trait Convertible: Any {
    fn target_type() -> TargetType;
}
