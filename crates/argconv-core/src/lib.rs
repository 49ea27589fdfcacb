//! String-to-typed-value coercion for command-line argument parsers.
//!
//! Given an option name, a [`TargetType`] and the raw text the user typed,
//! the [`Converter`] tries a fixed, ordered list of strategies until one
//! produces a [`Value`]:
//!
//! 1. **builtin** - text, boolean, `i8`..`i64`, `f32`/`f64`
//! 2. **fromString** - a static `fromString` factory registered on the type
//! 3. **valueOf** - a static `valueOf` factory registered on the type
//! 4. **constructor** - a single-string-argument constructor
//!
//! Strategies signal "does not apply" with [`ConversionOutcome::Failure`]
//! instead of errors. Only two errors leave the converter: an
//! [`Error::InvalidArgument`] when a required input is absent, and an
//! [`Error::TypeConversion`] when every strategy declined.
//!
//! # Example
//!
//! ```
//! use argconv_core::{Converter, TargetType};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Level {
//!     Low,
//!     High,
//! }
//!
//! let level = TargetType::new::<Level>("Level").with_value_of(|raw: &str| match raw {
//!     "low" => Ok(Level::Low),
//!     "high" => Ok(Level::High),
//!     other => Err(format!("unknown level {other}")),
//! });
//!
//! let converter = Converter::new();
//! assert_eq!(converter.convert_as::<Level>("--level", &level, "high").unwrap(), Level::High);
//! assert!(converter.convert_as::<Level>("--level", &level, "medium").is_err());
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod outcome;
pub mod registry;
pub mod strategy;
pub mod target;
pub mod value;

pub use config::{ConverterConfig, StrategyKind};
pub use converter::{Converter, TypeConverter};
pub use error::{BoxError, Error, Result};
pub use outcome::ConversionOutcome;
pub use registry::TypeRegistry;
pub use strategy::{
    BuiltinStrategy, ConstructorStrategy, ConversionStrategy, FactoryMethod,
    FactoryMethodStrategy,
};
pub use target::{BuiltinKind, Convertible, Factory, TargetType};
pub use value::{CustomValue, Value};
