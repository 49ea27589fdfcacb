//! Outcome of a single conversion strategy

use crate::value::Value;

/// The signal a strategy passes back to the converter.
///
/// `Failure` means "this strategy does not apply or could not convert";
/// it is not an error and carries no cause.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    Success(Value),
    Failure,
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success(_))
    }

    /// Consume the outcome, returning the converted value on success.
    pub fn into_value(self) -> Option<Value> {
        match self {
            ConversionOutcome::Success(value) => Some(value),
            ConversionOutcome::Failure => None,
        }
    }
}

impl From<Option<Value>> for ConversionOutcome {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(value) => ConversionOutcome::Success(value),
            None => ConversionOutcome::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_yields_value() {
        let outcome = ConversionOutcome::Success(Value::I32(7));
        assert!(outcome.is_success());
        assert_eq!(outcome.into_value(), Some(Value::I32(7)));
    }

    #[test]
    fn test_failure_yields_nothing() {
        assert!(!ConversionOutcome::Failure.is_success());
        assert_eq!(ConversionOutcome::Failure.into_value(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(
            ConversionOutcome::from(Some(Value::Bool(true))),
            ConversionOutcome::Success(Value::Bool(true))
        );
        assert_eq!(ConversionOutcome::from(None), ConversionOutcome::Failure);
    }
}
