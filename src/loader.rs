//! Hand-edited mapping files.
//!
//! TOML:
//!
//! ```toml
//! [[users]]
//! telegramUsername = "alice_dev"
//! linearName = "alice"
//! linearEmail = "alice@yourcompany.com"
//! aliases = ["alice", "al"]
//! ```
//!
//! JSON is a top-level array of the same objects. Snake-case keys
//! (`telegram_username`, ...) are accepted by both formats.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::models::UserMapping;
use crate::errors::MappingError;
use crate::mappings::UserDirectory;

#[derive(Debug, Default, Serialize, Deserialize)]
struct MappingFileData {
    #[serde(default)]
    users: Vec<UserMapping>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Json,
}

fn format_for(path: &Path) -> Result<FileFormat, MappingError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "toml" => Ok(FileFormat::Toml),
        "json" => Ok(FileFormat::Json),
        _ => Err(MappingError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Parse mappings from a string in the given format. Record order is kept.
fn parse_mappings(contents: &str, format: FileFormat) -> Result<Vec<UserMapping>, MappingError> {
    match format {
        FileFormat::Toml => {
            let data: MappingFileData = toml::from_str(contents)?;
            Ok(data.users)
        }
        FileFormat::Json if contents.trim().is_empty() => Ok(Vec::new()),
        FileFormat::Json => Ok(serde_json::from_str(contents)?),
    }
}

/// Load mappings from a `.toml` or `.json` file.
///
/// Duplicate handles are logged but not rejected.
///
/// # Errors
///
/// Returns an error if the extension is unknown, the file cannot be read,
/// or its contents do not parse.
pub fn load_mappings<P: AsRef<Path>>(path: P) -> Result<Vec<UserMapping>, MappingError> {
    let path = path.as_ref();
    let format = format_for(path)?;
    debug!(path = %path.display(), ?format, "Reading mapping file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| MappingError::Io(format!("{}: {}", path.display(), e)))?;
    let users = parse_mappings(&contents, format)?;

    let directory = UserDirectory::new(users);
    for handle in directory.duplicate_handles() {
        warn!(path = %path.display(), handle = %handle, "Duplicate telegram username in mapping file");
    }

    Ok(directory.into_users())
}

/// Write mappings to a TOML file.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_mappings<P: AsRef<Path>>(path: P, users: &[UserMapping]) -> Result<(), MappingError> {
    let path = path.as_ref();
    let data = MappingFileData {
        users: users.to_vec(),
    };
    let toml_str = toml::to_string_pretty(&data)?;
    std::fs::write(path, toml_str)
        .map_err(|e| MappingError::Io(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), count = users.len(), "Saved user mappings");
    Ok(())
}
