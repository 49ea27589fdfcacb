//! The `types` and `strategies` commands

use std::io::Write;

use argconv_core::{Converter, TypeRegistry};
use colored::Colorize;

use crate::error::Result;

/// List every registered type name with the type it resolves to.
pub fn run_types(out: &mut impl Write, registry: &TypeRegistry) -> Result<()> {
    writeln!(out, "{}", "Registered Types".bold())?;
    writeln!(out)?;

    for name in registry.list_types() {
        let target = registry.resolve(&name)?;
        let via = describe_capabilities(target);
        if name == target.name() {
            writeln!(out, "  {:<12} {}", name.cyan(), via.dimmed())?;
        } else {
            writeln!(out, "  {:<12} -> {} {}", name.cyan(), target.name(), via.dimmed())?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{} types", registry.len())?;
    Ok(())
}

/// Print the strategies in the order they are tried.
pub fn run_strategies(out: &mut impl Write, converter: &Converter) -> Result<()> {
    writeln!(out, "{}", "Strategy Order".bold())?;
    writeln!(out)?;
    for (idx, name) in converter.strategy_names().iter().enumerate() {
        writeln!(out, "  {}. {}", idx + 1, name)?;
    }
    Ok(())
}

fn describe_capabilities(target: &argconv_core::TargetType) -> String {
    if let Some(kind) = target.builtin_kind() {
        return format!("(builtin {kind})");
    }

    let mut via = Vec::new();
    if target.has_from_string() {
        via.push("fromString");
    }
    if target.has_value_of() {
        via.push("valueOf");
    }
    if target.has_constructor() {
        via.push("constructor");
    }
    format!("({})", via.join(", "))
}
