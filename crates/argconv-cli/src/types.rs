//! Types known to the command line
//!
//! The built-in kinds plus a few standard library types, each registered
//! through a different capability so every strategy is reachable from the
//! command line.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use argconv_core::{TargetType, TypeRegistry, Value};

/// Build the registry used by the CLI.
pub fn cli_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::with_builtins();

    registry.register(
        "PathBuf",
        TargetType::new::<PathBuf>("PathBuf")
            .with_constructor(|raw: &str| Ok::<_, std::convert::Infallible>(PathBuf::from(raw))),
    );
    registry.register(
        "IpAddr",
        TargetType::new::<IpAddr>("IpAddr").with_from_str::<IpAddr>(),
    );
    registry.register(
        "SocketAddr",
        TargetType::new::<SocketAddr>("SocketAddr")
            .with_from_string(|raw: &str| raw.parse::<SocketAddr>()),
    );
    registry.register(
        "Duration",
        TargetType::new::<Duration>("Duration").with_from_string(parse_duration),
    );

    registry
}

/// Render a converted value for the terminal.
///
/// The std types registered above print through their own `Display`;
/// everything else falls back to [`Value`]'s `Display`.
pub fn render_value(value: &Value) -> String {
    if let Some(path) = value.get::<PathBuf>() {
        return path.display().to_string();
    }
    if let Some(ip) = value.get::<IpAddr>() {
        return ip.to_string();
    }
    if let Some(addr) = value.get::<SocketAddr>() {
        return addr.to_string();
    }
    value.to_string()
}

/// Parse `<n>ms`, `<n>s` or `<n>m`.
fn parse_duration(raw: &str) -> Result<Duration, String> {
    let (digits, unit) = raw
        .find(|c: char| !c.is_ascii_digit())
        .map(|idx| raw.split_at(idx))
        .ok_or_else(|| format!("missing unit in {raw:?}"))?;
    let amount: u64 = digits
        .parse()
        .map_err(|e| format!("invalid amount in {raw:?}: {e}"))?;

    match unit {
        "ms" => Ok(Duration::from_millis(amount)),
        "s" => Ok(Duration::from_secs(amount)),
        "m" => amount
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("duration too large: {raw:?}")),
        other => Err(format!("unknown unit {other:?}")),
    }
}
