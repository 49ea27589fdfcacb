//! Single-string-argument constructor strategy

use super::{ConversionStrategy, invoke_capability};
use crate::outcome::ConversionOutcome;
use crate::target::TargetType;

/// Invokes the target's registered text constructor.
///
/// A constructor that rejects its input (for example through the type's own
/// validation) is indistinguishable from a missing constructor: both decline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructorStrategy;

impl ConstructorStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl ConversionStrategy for ConstructorStrategy {
    fn name(&self) -> &str {
        "constructor"
    }

    fn try_convert(&self, target: &TargetType, raw: &str) -> ConversionOutcome {
        invoke_capability(self.name(), target, target.constructor(), raw)
    }
}
