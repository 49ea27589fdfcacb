//! Conversion strategies
//!
//! Each strategy is one self-contained conversion attempt. It either
//! produces a value or declines with [`ConversionOutcome::Failure`]; it never
//! returns an error. The [`Converter`](crate::Converter) tries them in order:
//!
//! - **BuiltinStrategy**: text, boolean, signed integers and floats
//! - **FactoryMethodStrategy**: static `fromString` / `valueOf` factories
//! - **ConstructorStrategy**: single-string-argument constructor

mod builtin;
mod constructor;
mod factory;

pub use builtin::{BuiltinStrategy, parse_builtin};
pub use constructor::ConstructorStrategy;
pub use factory::{FactoryMethod, FactoryMethodStrategy};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, trace};

use crate::outcome::ConversionOutcome;
use crate::target::{Factory, TargetType};

/// A single step of the resolution chain.
///
/// Implementations must be free of side effects: the converter may stop
/// after any strategy, and the same strategy may be called concurrently.
pub trait ConversionStrategy: Send + Sync {
    /// Short identifier used in logs and listings.
    fn name(&self) -> &str;

    /// Attempt to convert `raw` into an instance of `target`.
    fn try_convert(&self, target: &TargetType, raw: &str) -> ConversionOutcome;
}

/// Invoke a registered capability, collapsing any failure into
/// [`ConversionOutcome::Failure`].
///
/// The discarded cause, including a panic raised by host code, is logged
/// at debug level.
pub(crate) fn invoke_capability(
    strategy: &str,
    target: &TargetType,
    factory: Option<&Factory>,
    raw: &str,
) -> ConversionOutcome {
    let Some(factory) = factory else {
        trace!(strategy, target = %target, "capability not declared");
        return ConversionOutcome::Failure;
    };

    if !factory.is_assignable_to(target) {
        debug!(
            strategy,
            target = %target,
            returns = factory.returns_name(),
            "declared return type is not assignable to target"
        );
        return ConversionOutcome::Failure;
    }

    // Host code may panic (`raw.parse().unwrap()`); that is a declined
    // conversion, not a crash of the argument parser.
    match panic::catch_unwind(AssertUnwindSafe(|| factory.invoke(raw))) {
        Ok(Ok(value)) => ConversionOutcome::Success(value),
        Ok(Err(error)) => {
            debug!(strategy, target = %target, error = %error, "strategy declined");
            ConversionOutcome::Failure
        }
        Err(payload) => {
            debug!(
                strategy,
                target = %target,
                panic = panic_message(payload.as_ref()),
                "capability panicked"
            );
            ConversionOutcome::Failure
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}

/// The canonical strategy order: built-in, `fromString`, `valueOf`,
/// constructor.
pub fn default_strategies() -> Vec<Box<dyn ConversionStrategy>> {
    vec![
        Box::new(BuiltinStrategy::new()),
        Box::new(FactoryMethodStrategy::new(FactoryMethod::FromString)),
        Box::new(FactoryMethodStrategy::new(FactoryMethod::ValueOf)),
        Box::new(ConstructorStrategy::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::value::Value;

    #[derive(Debug, PartialEq)]
    struct Tag(String);

    #[test]
    fn test_default_order() {
        let names: Vec<String> = default_strategies()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["builtin", "fromString", "valueOf", "constructor"]);
    }

    #[test]
    fn test_invoke_missing_capability() {
        let target = TargetType::new::<Tag>("Tag");
        let outcome = invoke_capability("test", &target, None, "x");
        assert_eq!(outcome, ConversionOutcome::Failure);
    }

    #[test]
    fn test_invoke_success() {
        let target = TargetType::new::<Tag>("Tag");
        let factory = Factory::new(|raw: &str| Ok::<_, BoxError>(Tag(raw.to_string())));
        let outcome = invoke_capability("test", &target, Some(&factory), "x");
        assert_eq!(outcome, ConversionOutcome::Success(Value::custom(Tag("x".into()))));
    }

    #[test]
    fn test_invoke_error_is_failure() {
        let target = TargetType::new::<Tag>("Tag");
        let factory = Factory::new(|_: &str| Err::<Tag, _>("rejected"));
        let outcome = invoke_capability("test", &target, Some(&factory), "x");
        assert_eq!(outcome, ConversionOutcome::Failure);
    }

    #[test]
    fn test_invoke_panic_is_failure() {
        let target = TargetType::new::<Tag>("Tag");
        let factory = Factory::new(|raw: &str| -> Result<Tag, BoxError> {
            panic!("refusing {raw}")
        });
        let outcome = invoke_capability("test", &target, Some(&factory), "x");
        assert_eq!(outcome, ConversionOutcome::Failure);
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(payload.as_ref()), "static");
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");
        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "<non-string panic payload>");
    }
}
