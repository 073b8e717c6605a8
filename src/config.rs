use std::path::PathBuf;

use crate::cli::{CSV_FLAG, DELIMITER_FLAG, OUTPUT_FLAG};
use crate::error::PropgenError;
use crate::resolver::FlagResolver;

/// Effective conversion settings, derived from the resolved flags.
#[derive(Debug)]
pub struct Config {
    pub source: PathBuf,
    pub delimiter: String,
    pub output: PathBuf,
}

impl Config {
    /// Builds the configuration from the resolver's effective values.
    ///
    /// Every built-in flag carries a default, so this only fails when a
    /// flag specification without defaults is used.
    pub fn from_resolver(resolver: &FlagResolver) -> Result<Self, PropgenError> {
        Ok(Self {
            source: PathBuf::from(Self::require(resolver, CSV_FLAG)?),
            delimiter: Self::require(resolver, DELIMITER_FLAG)?.to_string(),
            output: PathBuf::from(Self::require(resolver, OUTPUT_FLAG)?),
        })
    }

    fn require<'a>(resolver: &'a FlagResolver, flag: &str) -> Result<&'a str, PropgenError> {
        resolver.value(flag).ok_or_else(|| {
            PropgenError::Config(format!("no value or default available for flag {}", flag))
        })
    }
}
