//! Built-in type strategy

use tracing::debug;

use super::ConversionStrategy;
use crate::error::BoxError;
use crate::outcome::ConversionOutcome;
use crate::target::{BuiltinKind, TargetType};
use crate::value::Value;

/// Handles the closed set of [`BuiltinKind`]s without consulting the
/// target's capability table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStrategy;

impl BuiltinStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl ConversionStrategy for BuiltinStrategy {
    fn name(&self) -> &str {
        "builtin"
    }

    fn try_convert(&self, target: &TargetType, raw: &str) -> ConversionOutcome {
        let Some(kind) = target.builtin_kind() else {
            return ConversionOutcome::Failure;
        };

        match parse_builtin(kind, raw) {
            Ok(value) => ConversionOutcome::Success(value),
            Err(error) => {
                debug!(strategy = self.name(), target = %target, error = %error, "strategy declined");
                ConversionOutcome::Failure
            }
        }
    }
}

/// Parse `raw` as the given built-in kind.
///
/// - Text is returned unchanged.
/// - Booleans never fail: only a case-insensitive `"true"` is true.
/// - Integers are base-10 with an optional sign and no surrounding
///   whitespace.
/// - Floats are trimmed of leading and trailing control characters and
///   spaces before parsing. The only non-finite spellings are `NaN` and
///   `Infinity` (optionally signed), matched case-sensitively.
pub fn parse_builtin(kind: BuiltinKind, raw: &str) -> Result<Value, BoxError> {
    let value = match kind {
        BuiltinKind::Text => Value::Text(raw.to_string()),
        BuiltinKind::Boolean => Value::Bool(raw.eq_ignore_ascii_case("true")),
        BuiltinKind::Int8 => Value::I8(raw.parse()?),
        BuiltinKind::Int16 => Value::I16(raw.parse()?),
        BuiltinKind::Int32 => Value::I32(raw.parse()?),
        BuiltinKind::Int64 => Value::I64(raw.parse()?),
        BuiltinKind::Float32 => Value::F32(float_text(raw)?.parse()?),
        BuiltinKind::Float64 => Value::F64(float_text(raw)?.parse()?),
    };
    Ok(value)
}

fn float_text(raw: &str) -> Result<&str, BoxError> {
    let text = raw.trim_matches(|c: char| c <= ' ');
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let non_finite = ["inf", "infinity", "nan"]
        .iter()
        .any(|word| unsigned.eq_ignore_ascii_case(word));
    if non_finite && unsigned != "Infinity" && unsigned != "NaN" {
        return Err(format!("unsupported float spelling {text:?}").into());
    }
    Ok(text)
}
