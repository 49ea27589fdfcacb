//! The `convert` command

use std::io::Write;

use argconv_core::{Converter, TypeRegistry, Value};
use serde_json::json;

use crate::error::Result;
use crate::types::render_value;

/// Convert `value` to the type registered as `type_name` and write it to
/// `out`.
pub fn run_convert(
    out: &mut impl Write,
    converter: &Converter,
    registry: &TypeRegistry,
    type_name: &str,
    value: &str,
    name: &str,
    as_json: bool,
) -> Result<()> {
    let target = registry.resolve(type_name)?;
    let converted = converter.convert_str(name, target, value)?;

    if as_json {
        let output = json!({
            "name": name,
            "type": target.name(),
            "value": value_to_json(&converted),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(out, "{}", render_value(&converted))?;
    }

    Ok(())
}

/// Render a converted value as JSON.
///
/// Numbers and booleans map to their JSON counterparts; non-finite floats
/// become `null`; host types are rendered as strings.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Text(v) => json!(v),
        Value::Bool(v) => json!(v),
        Value::I8(v) => json!(v),
        Value::I16(v) => json!(v),
        Value::I32(v) => json!(v),
        Value::I64(v) => json!(v),
        Value::F32(v) => json!(v),
        Value::F64(v) => json!(v),
        Value::Custom(_) => json!(render_value(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::types::cli_registry;
    use argconv_core::{BoxError, Error, TargetType};
    use pretty_assertions::assert_eq;
    use std::io;
    use std::path::PathBuf;

    /// A sink whose every write fails, like a closed pipe.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn convert(type_name: &str, value: &str, as_json: bool) -> Result<String> {
        let mut out = Vec::new();
        run_convert(
            &mut out,
            &Converter::new(),
            &cli_registry(),
            type_name,
            value,
            "n",
            as_json,
        )?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_value_to_json() {
        assert_eq!(value_to_json(&Value::I32(42)), json!(42));
        assert_eq!(value_to_json(&Value::Bool(true)), json!(true));
        assert_eq!(value_to_json(&Value::Text("a".into())), json!("a"));
        assert_eq!(value_to_json(&Value::F64(1.5)), json!(1.5));
        assert_eq!(value_to_json(&Value::F64(f64::NAN)), serde_json::Value::Null);
        assert_eq!(
            value_to_json(&Value::custom(std::time::Duration::from_secs(1))),
            json!("1s")
        );
        assert_eq!(
            value_to_json(&Value::custom(PathBuf::from("/tmp/x"))),
            json!("/tmp/x")
        );
    }

    #[test]
    fn test_capability_result_on_builtin_type_is_a_json_number() {
        let target = TargetType::int32().with_constructor(|_: &str| Ok::<_, BoxError>(-1i32));
        let value = Converter::new().convert_str("n", &target, "seven").unwrap();
        assert_eq!(value_to_json(&value), json!(-1));
    }

    #[test]
    fn test_run_convert_success() {
        assert_eq!(convert("int", "7", false).unwrap(), "7\n");
    }

    #[test]
    fn test_run_convert_path_is_unquoted() {
        assert_eq!(convert("PathBuf", "/tmp/x", false).unwrap(), "/tmp/x\n");
    }

    #[test]
    fn test_run_convert_unknown_type() {
        let err = convert("Uuid", "x", false).unwrap_err();
        assert!(matches!(err, CliError::Core(Error::UnknownType { .. })));
    }

    #[test]
    fn test_run_convert_failure() {
        let mut out = Vec::new();
        let err = run_convert(
            &mut out,
            &Converter::new(),
            &cli_registry(),
            "int",
            "x",
            "--n",
            true,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "--n: can not convert \"x\" to a i32");
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_convert_write_failure_is_io_error() {
        let err = run_convert(
            &mut ClosedPipe,
            &Converter::new(),
            &cli_registry(),
            "int",
            "7",
            "n",
            false,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
