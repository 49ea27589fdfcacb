//! Converter configuration
//!
//! The strategy order is the converter's extension seam. It can be set in
//! code or loaded from a TOML file:
//!
//! ```toml
//! strategies = ["builtin", "from_string", "value_of", "constructor"]
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::strategy::{
    BuiltinStrategy, ConstructorStrategy, ConversionStrategy, FactoryMethod,
    FactoryMethodStrategy,
};

/// One of the conversion strategies shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[serde(alias = "built-in", alias = "basic")]
    Builtin,
    #[serde(alias = "fromString")]
    FromString,
    #[serde(alias = "valueOf")]
    ValueOf,
    #[serde(alias = "string_constructor")]
    Constructor,
}

impl StrategyKind {
    /// The canonical order.
    pub const DEFAULT_ORDER: [StrategyKind; 4] = [
        StrategyKind::Builtin,
        StrategyKind::FromString,
        StrategyKind::ValueOf,
        StrategyKind::Constructor,
    ];

    /// Instantiate the strategy.
    pub fn build(&self) -> Box<dyn ConversionStrategy> {
        match self {
            StrategyKind::Builtin => Box::new(BuiltinStrategy::new()),
            StrategyKind::FromString => {
                Box::new(FactoryMethodStrategy::new(FactoryMethod::FromString))
            }
            StrategyKind::ValueOf => Box::new(FactoryMethodStrategy::new(FactoryMethod::ValueOf)),
            StrategyKind::Constructor => Box::new(ConstructorStrategy::new()),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "builtin" | "built-in" | "basic" => Ok(StrategyKind::Builtin),
            "from_string" | "fromString" => Ok(StrategyKind::FromString),
            "value_of" | "valueOf" => Ok(StrategyKind::ValueOf),
            "constructor" | "string_constructor" => Ok(StrategyKind::Constructor),
            _ => Err(Error::invalid_config(
                "<inline>",
                format!("unknown strategy: {s}"),
            )),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Builtin => write!(f, "builtin"),
            StrategyKind::FromString => write!(f, "from_string"),
            StrategyKind::ValueOf => write!(f, "value_of"),
            StrategyKind::Constructor => write!(f, "constructor"),
        }
    }
}

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Strategies to try, in order
    #[serde(default = "default_strategies")]
    pub strategies: Vec<StrategyKind>,
}

fn default_strategies() -> Vec<StrategyKind> {
    StrategyKind::DEFAULT_ORDER.to_vec()
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            strategies: default_strategies(),
        }
    }
}

impl ConverterConfig {
    /// Create a configuration with an explicit strategy order.
    pub fn with_strategies(strategies: Vec<StrategyKind>) -> Result<Self> {
        let config = Self { strategies };
        config.validate("<inline>")?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::invalid_config(path, e.to_string()))?;
        config.validate(path)?;
        tracing::debug!(path = %path.display(), strategies = ?config.strategies, "Loaded converter config");
        Ok(config)
    }

    fn validate(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if self.strategies.is_empty() {
            return Err(Error::invalid_config(path, "strategy list is empty"));
        }

        let mut seen = HashSet::new();
        for kind in &self.strategies {
            if !seen.insert(kind) {
                return Err(Error::invalid_config(
                    path,
                    format!("strategy listed more than once: {kind}"),
                ));
            }
        }
        Ok(())
    }
}
