//! Command implementations for argconv

mod convert;
mod list;

pub use convert::run_convert;
pub use list::{run_strategies, run_types};

use std::path::Path;

use argconv_core::{Converter, ConverterConfig};

use crate::error::Result;

/// Build the converter, honoring a configuration file when one is given.
pub fn load_converter(config: Option<&Path>) -> Result<Converter> {
    let config = match config {
        Some(path) => ConverterConfig::load(path)?,
        None => ConverterConfig::default(),
    };
    tracing::debug!(strategies = ?config.strategies, "Using strategy order");
    Ok(Converter::from_config(&config))
}
