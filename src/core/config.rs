use std::env;
use std::path::PathBuf;

use crate::errors::MappingError;

pub const MAPPINGS_FILE_VAR: &str = "USER_MAPPINGS_FILE";
pub const MAPPINGS_STRICT_VAR: &str = "USER_MAPPINGS_STRICT";

#[derive(Debug, Clone, Default)]
pub struct MappingConfig {
    pub mappings_file: Option<PathBuf>,
    pub strict: bool,
}

impl MappingConfig {
    /// # Errors
    ///
    /// Returns an error if `USER_MAPPINGS_STRICT` holds something other than a boolean.
    pub fn from_env() -> Result<Self, MappingError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if the strict flag cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MappingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mappings_file = lookup(MAPPINGS_FILE_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let strict = match lookup(MAPPINGS_STRICT_VAR) {
            None => false,
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| MappingError::Config(format!("{}: {}", MAPPINGS_STRICT_VAR, raw)))?,
        };

        Ok(Self {
            mappings_file,
            strict,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
