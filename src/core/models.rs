use serde::{Deserialize, Serialize};

/// One chat user and the project-tracker account they map to.
///
/// Handles are expected to be unique across a directory, but nothing
/// enforces it; see [`crate::mappings::UserDirectory::duplicate_handles`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMapping {
    /// Telegram username, without the leading `@`.
    #[serde(alias = "telegram_username")]
    pub telegram_username: String,
    /// Name as it appears in Linear.
    #[serde(alias = "linear_name")]
    pub linear_name: String,
    /// Email used in Linear.
    #[serde(alias = "linear_email")]
    pub linear_email: String,
    /// Alternative names that can be used to refer to this person.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl UserMapping {
    pub fn new(
        telegram_username: impl Into<String>,
        linear_name: impl Into<String>,
        linear_email: impl Into<String>,
        aliases: &[&str],
    ) -> Self {
        Self {
            telegram_username: telegram_username.into(),
            linear_name: linear_name.into(),
            linear_email: linear_email.into(),
            aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    /// True when the handle, name, email or any alias equals `normalized`
    /// ignoring case. `normalized` is expected to be lowercased already.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        self.telegram_username.to_lowercase() == normalized
            || self.linear_name.to_lowercase() == normalized
            || self.linear_email.to_lowercase() == normalized
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase() == normalized)
    }
}
