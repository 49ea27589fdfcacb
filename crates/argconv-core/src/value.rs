//! Converted values
//!
//! A [`Value`] is what the resolver hands back to the argument parser. The
//! built-in kinds get their own variants; everything else is carried as a
//! [`CustomValue`] trait object and recovered with [`Value::get`] or
//! [`Value::into_inner`].

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Object-safe view of a host type produced by a factory or constructor.
///
/// Implemented for every `Any + Debug + PartialEq + Send + Sync` type, so
/// host code never implements it by hand.
pub trait CustomValue: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn dyn_eq(&self, other: &dyn CustomValue) -> bool;

    fn type_name(&self) -> &'static str;
}

impl<T> CustomValue for T
where
    T: Any + fmt::Debug + PartialEq + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn CustomValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| other == self)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A converted, strongly typed value.
#[derive(Debug, Clone)]
pub enum Value {
    Text(String),
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Custom(Arc<dyn CustomValue>),
}

impl Value {
    /// Wrap a host type.
    ///
    /// Built-in types land in their native variant, so a factory declared to
    /// return `i32` compares equal to a parsed `Value::I32`.
    ///
    /// ```
    /// use argconv_core::Value;
    ///
    /// assert_eq!(Value::custom(-1i32), Value::I32(-1));
    /// assert!(matches!(Value::custom(8080u16), Value::Custom(_)));
    /// ```
    pub fn custom<T>(value: T) -> Self
    where
        T: Any + fmt::Debug + PartialEq + Send + Sync,
    {
        let any: &dyn Any = &value;
        if let Some(v) = any.downcast_ref::<Value>() {
            return v.clone();
        }
        if let Some(v) = any.downcast_ref::<String>() {
            return Value::Text(v.clone());
        }
        if let Some(&v) = any.downcast_ref::<bool>() {
            return Value::Bool(v);
        }
        if let Some(&v) = any.downcast_ref::<i8>() {
            return Value::I8(v);
        }
        if let Some(&v) = any.downcast_ref::<i16>() {
            return Value::I16(v);
        }
        if let Some(&v) = any.downcast_ref::<i32>() {
            return Value::I32(v);
        }
        if let Some(&v) = any.downcast_ref::<i64>() {
            return Value::I64(v);
        }
        if let Some(&v) = any.downcast_ref::<f32>() {
            return Value::F32(v);
        }
        if let Some(&v) = any.downcast_ref::<f64>() {
            return Value::F64(v);
        }
        Value::Custom(Arc::new(value))
    }

    fn as_any(&self) -> &dyn Any {
        match self {
            Value::Text(v) => v,
            Value::Bool(v) => v,
            Value::I8(v) => v,
            Value::I16(v) => v,
            Value::I32(v) => v,
            Value::I64(v) => v,
            Value::F32(v) => v,
            Value::F64(v) => v,
            Value::Custom(v) => (**v).as_any(),
        }
    }

    /// Borrow the value as `T`, if that is the type it holds.
    ///
    /// ```
    /// use argconv_core::Value;
    ///
    /// let value = Value::I32(42);
    /// assert_eq!(value.get::<i32>(), Some(&42));
    /// assert_eq!(value.get::<i64>(), None);
    /// ```
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Extract an owned `T`, if that is the type the value holds.
    pub fn into_inner<T: Any + Clone>(self) -> Option<T> {
        self.get::<T>().cloned()
    }

    /// The `TypeId` of the held value.
    pub fn value_type_id(&self) -> TypeId {
        self.as_any().type_id()
    }

    /// Name of the held Rust type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "String",
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Custom(v) => (**v).type_name(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I8(a), Value::I8(b)) => a == b,
            (Value::I16(a), Value::I16(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => a.dyn_eq(&**b),
            _ => false,
        }
    }
}

/// Built-in variants print their plain value. Host types have no `Display`
/// bound and print their `Debug` form, so a `PathBuf` renders quoted; callers
/// that know the concrete type can downcast with [`Value::get`] instead.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::I8(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Custom(v) => write!(f, "{:?}", v),
        }
    }
}
