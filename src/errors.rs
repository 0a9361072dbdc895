use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Failed to read mapping file: {0}")]
    Io(String),

    #[error("Failed to parse mapping file: {0}")]
    Parse(String),

    #[error("Unsupported mapping file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid mapping configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for MappingError {
    fn from(error: serde_json::Error) -> Self {
        MappingError::Parse(format!("JSON: {}", error))
    }
}

impl From<toml::de::Error> for MappingError {
    fn from(error: toml::de::Error) -> Self {
        MappingError::Parse(format!("TOML: {}", error))
    }
}

impl From<toml::ser::Error> for MappingError {
    fn from(error: toml::ser::Error) -> Self {
        MappingError::Parse(format!("TOML serialize: {}", error))
    }
}

impl From<anyhow::Error> for MappingError {
    fn from(error: anyhow::Error) -> Self {
        MappingError::Config(error.to_string())
    }
}
