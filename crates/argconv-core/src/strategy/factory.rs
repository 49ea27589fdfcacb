//! Factory-by-convention strategies

use std::fmt;

use super::{ConversionStrategy, invoke_capability};
use crate::outcome::ConversionOutcome;
use crate::target::{Factory, TargetType};

/// Which conventional static factory a [`FactoryMethodStrategy`] consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactoryMethod {
    /// `fromString(text)`
    FromString,
    /// `valueOf(text)`; also what [`TargetType::with_from_str`] registers.
    ValueOf,
}

impl FactoryMethod {
    pub fn method_name(&self) -> &'static str {
        match self {
            FactoryMethod::FromString => "fromString",
            FactoryMethod::ValueOf => "valueOf",
        }
    }

    fn lookup<'a>(&self, target: &'a TargetType) -> Option<&'a Factory> {
        match self {
            FactoryMethod::FromString => target.from_string(),
            FactoryMethod::ValueOf => target.value_of(),
        }
    }
}

impl fmt::Display for FactoryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// Invokes a static factory declared on the target type.
///
/// Declines when the factory is missing, when its declared return type is
/// not the target type, or when the factory itself fails.
#[derive(Debug, Clone, Copy)]
pub struct FactoryMethodStrategy {
    method: FactoryMethod,
}

impl FactoryMethodStrategy {
    pub fn new(method: FactoryMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> FactoryMethod {
        self.method
    }
}

impl ConversionStrategy for FactoryMethodStrategy {
    fn name(&self) -> &str {
        self.method.method_name()
    }

    fn try_convert(&self, target: &TargetType, raw: &str) -> ConversionOutcome {
        invoke_capability(self.name(), target, self.method.lookup(target), raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::value::Value;

    #[derive(Debug, Clone, PartialEq)]
    struct Color(String);

    #[derive(Debug, PartialEq)]
    struct Unrelated;

    fn color_target() -> TargetType {
        TargetType::new::<Color>("Color")
            .with_from_string(|raw: &str| Ok::<_, BoxError>(Color(format!("from:{raw}"))))
            .with_value_of(|raw: &str| Ok::<_, BoxError>(Color(format!("value:{raw}"))))
    }

    #[test]
    fn test_from_string_uses_from_string_only() {
        let strategy = FactoryMethodStrategy::new(FactoryMethod::FromString);
        let outcome = strategy.try_convert(&color_target(), "red");
        assert_eq!(
            outcome,
            ConversionOutcome::Success(Value::custom(Color("from:red".into())))
        );
    }

    #[test]
    fn test_value_of_uses_value_of_only() {
        let strategy = FactoryMethodStrategy::new(FactoryMethod::ValueOf);
        let outcome = strategy.try_convert(&color_target(), "red");
        assert_eq!(
            outcome,
            ConversionOutcome::Success(Value::custom(Color("value:red".into())))
        );
    }

    #[test]
    fn test_missing_factory_declines() {
        let target = TargetType::new::<Color>("Color");
        for method in [FactoryMethod::FromString, FactoryMethod::ValueOf] {
            let outcome = FactoryMethodStrategy::new(method).try_convert(&target, "red");
            assert_eq!(outcome, ConversionOutcome::Failure);
        }
    }

    #[test]
    fn test_unassignable_return_type_declines() {
        let target = TargetType::new::<Color>("Color")
            .with_from_string(|_: &str| Ok::<_, BoxError>(Unrelated));
        let outcome =
            FactoryMethodStrategy::new(FactoryMethod::FromString).try_convert(&target, "red");
        assert_eq!(outcome, ConversionOutcome::Failure);
    }

    #[test]
    fn test_failing_factory_declines() {
        let target = TargetType::new::<Color>("Color")
            .with_value_of(|raw: &str| -> Result<Color, BoxError> {
                Err(format!("no such color: {raw}").into())
            });
        let outcome =
            FactoryMethodStrategy::new(FactoryMethod::ValueOf).try_convert(&target, "mauve");
        assert_eq!(outcome, ConversionOutcome::Failure);
    }

    #[test]
    fn test_names() {
        assert_eq!(FactoryMethodStrategy::new(FactoryMethod::FromString).name(), "fromString");
        assert_eq!(FactoryMethod::ValueOf.to_string(), "valueOf");
    }
}
