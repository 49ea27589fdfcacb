//! The resolution chain
//!
//! [`Converter`] owns an ordered list of [`ConversionStrategy`]s and tries
//! them one after another until one succeeds. The first success wins; later
//! strategies are never attempted. When every strategy declines, the caller
//! gets a single [`Error::TypeConversion`] naming the option, the raw text,
//! and the target type, and nothing about why each strategy declined.

use std::any::Any;
use std::fmt;

use tracing::{debug, trace};

use crate::config::ConverterConfig;
use crate::error::{Error, Result};
use crate::outcome::ConversionOutcome;
use crate::strategy::{ConversionStrategy, default_strategies};
use crate::target::{Convertible, TargetType};
use crate::value::Value;

/// Capability contract consumed by an argument parser.
///
/// Each argument is optional so that an absent name, type, or value can be
/// reported as a contract violation instead of being silently defaulted.
pub trait TypeConverter: Send + Sync {
    fn convert(
        &self,
        name: Option<&str>,
        target: Option<&TargetType>,
        value: Option<&str>,
    ) -> Result<Value>;
}

/// The default [`TypeConverter`].
///
/// # Example
///
/// ```
/// use argconv_core::{Converter, TargetType, Value};
///
/// let converter = Converter::new();
/// let port = converter.convert_str("--port", &TargetType::int32(), "8080").unwrap();
/// assert_eq!(port, Value::I32(8080));
/// ```
pub struct Converter {
    strategies: Vec<Box<dyn ConversionStrategy>>,
}

impl Converter {
    /// Create a converter with the canonical strategy order.
    pub fn new() -> Self {
        Self {
            strategies: default_strategies(),
        }
    }

    /// Create a converter with an explicit strategy list.
    ///
    /// An empty list is allowed; every conversion then fails.
    pub fn with_strategies(strategies: Vec<Box<dyn ConversionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Create a converter from a configured strategy order.
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self {
            strategies: config.strategies.iter().map(|kind| kind.build()).collect(),
        }
    }

    /// Append a strategy to the end of the chain.
    pub fn push_strategy(&mut self, strategy: Box<dyn ConversionStrategy>) {
        self.strategies.push(strategy);
    }

    /// Names of the strategies, in the order they are tried.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Convert with all arguments present.
    pub fn convert_str(&self, name: &str, target: &TargetType, value: &str) -> Result<Value> {
        self.convert(Some(name), Some(target), Some(value))
    }

    /// Convert and extract the concrete Rust type.
    ///
    /// Fails with [`Error::TypeConversion`] if the converted value is not a
    /// `T`.
    pub fn convert_as<T: Any + Clone>(
        &self,
        name: &str,
        target: &TargetType,
        value: &str,
    ) -> Result<T> {
        self.convert_str(name, target, value)?
            .into_inner::<T>()
            .ok_or_else(|| conversion_failure(name, target, value))
    }

    /// Convert into a type that registers its own capabilities.
    pub fn convert_type<T: Convertible + Clone>(&self, name: &str, value: &str) -> Result<T> {
        self.convert_as::<T>(name, &T::target_type(), value)
    }

    fn resolve(&self, name: &str, target: &TargetType, value: &str) -> Result<Value> {
        for strategy in &self.strategies {
            trace!(strategy = strategy.name(), target = %target, "Trying strategy");
            if let ConversionOutcome::Success(converted) = strategy.try_convert(target, value) {
                debug!(
                    option = name,
                    strategy = strategy.name(),
                    target = %target,
                    "Converted value"
                );
                return Ok(converted);
            }
        }

        debug!(option = name, target = %target, "No strategy could convert value");
        Err(conversion_failure(name, target, value))
    }
}

impl TypeConverter for Converter {
    fn convert(
        &self,
        name: Option<&str>,
        target: Option<&TargetType>,
        value: Option<&str>,
    ) -> Result<Value> {
        let name = name.ok_or(Error::InvalidArgument { argument: "name" })?;
        let target = target.ok_or(Error::InvalidArgument { argument: "type" })?;
        let value = value.ok_or(Error::InvalidArgument { argument: "value" })?;
        self.resolve(name, target, value)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

fn conversion_failure(name: &str, target: &TargetType, value: &str) -> Error {
    Error::TypeConversion {
        name: name.to_string(),
        value: value.to_string(),
        type_name: target.name().to_string(),
    }
}
