//! Lookup table between Telegram usernames and Linear users.
//!
//! Configure [`USER_MAPPINGS`] with your team members (or point
//! `USER_MAPPINGS_FILE` at a mapping file) to enable:
//! - assignee resolution from chat messages
//! - AI name matching with aliases
//! - "assign me" / "for me" resolution based on the sender

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::{debug, info, warn};

use crate::core::config::MappingConfig;
use crate::core::models::UserMapping;
use crate::errors::MappingError;
use crate::loader::load_mappings;
use crate::prompt::is_self_reference;
use crate::utils::identifiers::normalize_identifier;

/// Built-in team table. Replace the example entry with your team members.
///
/// Example entry:
///
/// ```text
/// UserMapping::new(
///     "john_doe",               // Telegram username without @
///     "john",                   // Name as it appears in Linear
///     "john@yourcompany.com",   // Email used in Linear
///     &["john", "johnny", "jd"], // Alternative names to match
/// )
/// ```
pub static USER_MAPPINGS: Lazy<Vec<UserMapping>> = Lazy::new(|| {
    vec![
        UserMapping::new(
            "example_user",
            "example",
            "example@yourcompany.com",
            &["example", "ex"],
        ),
        // UserMapping::new("alice_dev", "alice", "alice@yourcompany.com", &["alice", "al"]),
        // UserMapping::new("bob_pm", "bob", "bob@yourcompany.com", &["bob", "bobby"]),
    ]
});

/// Find a Linear user in the built-in table by any identifier
/// (Telegram username, Linear name, email or alias).
#[must_use]
pub fn find_linear_user_by_identifier(identifier: &str) -> Option<&'static UserMapping> {
    find_in(USER_MAPPINGS.as_slice(), identifier)
}

/// All handles, names and aliases from the built-in table, for AI prompts.
#[must_use]
pub fn all_user_aliases() -> Vec<String> {
    collect_aliases(USER_MAPPINGS.as_slice())
}

fn find_in<'a>(users: &'a [UserMapping], identifier: &str) -> Option<&'a UserMapping> {
    let normalized = normalize_identifier(identifier);
    let found = users.iter().find(|user| user.matches(&normalized));

    match found {
        Some(user) => {
            #[cfg(feature = "debug-logs")]
            debug!(identifier, linear_email = %user.linear_email, "Resolved user mapping");
            #[cfg(not(feature = "debug-logs"))]
            debug!(
                identifier,
                linear_email = %crate::utils::identifiers::mask_email(&user.linear_email),
                "Resolved user mapping"
            );
            Some(user)
        }
        None => {
            debug!(identifier, "No user mapping matched");
            None
        }
    }
}

fn collect_aliases(users: &[UserMapping]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<String> = Vec::new();

    for user in users {
        let names = std::iter::once(user.telegram_username.as_str())
            .chain(std::iter::once(user.linear_name.as_str()))
            .chain(user.aliases.iter().map(String::as_str));
        for name in names {
            if seen.insert(name) {
                out.push(name.to_string());
            }
        }
    }

    out
}

/// An ordered set of user mappings with the same lookup rules as the
/// built-in table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<UserMapping>,
}

impl UserDirectory {
    #[must_use]
    pub fn new(users: Vec<UserMapping>) -> Self {
        Self { users }
    }

    /// A copy of [`USER_MAPPINGS`].
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(USER_MAPPINGS.clone())
    }

    /// Load the directory described by `config`.
    ///
    /// Falls back to the built-in table when no file is configured, or when
    /// the configured file is missing and `strict` is off.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it is
    /// missing in strict mode.
    pub fn from_config(config: &MappingConfig) -> Result<Self, MappingError> {
        let Some(path) = config.mappings_file.as_deref() else {
            debug!("No mapping file configured, using built-in table");
            return Ok(Self::builtin());
        };

        if !path.exists() {
            if config.strict {
                return Err(MappingError::Io(format!(
                    "{}: file not found",
                    path.display()
                )));
            }
            warn!(path = %path.display(), "Mapping file not found, using built-in table");
            return Ok(Self::builtin());
        }

        let directory = Self::new(load_mappings(path)?);
        info!(
            path = %path.display(),
            count = directory.len(),
            "Loaded user mappings"
        );
        Ok(directory)
    }

    #[must_use]
    pub fn users(&self) -> &[UserMapping] {
        &self.users
    }

    #[must_use]
    pub fn into_users(self) -> Vec<UserMapping> {
        self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// First mapping, in list order, whose handle, name, email or alias
    /// equals `identifier` after normalization.
    #[must_use]
    pub fn find_linear_user_by_identifier(&self, identifier: &str) -> Option<&UserMapping> {
        find_in(&self.users, identifier)
    }

    /// Deduplicated handles, names and aliases in first-occurrence order.
    #[must_use]
    pub fn all_user_aliases(&self) -> Vec<String> {
        collect_aliases(&self.users)
    }

    /// Resolve the user an assignment refers to.
    ///
    /// "me", "for me" and similar resolve to the sender; anything else is
    /// looked up as an identifier.
    #[must_use]
    pub fn resolve_assignee(
        &self,
        requested: &str,
        sender_username: Option<&str>,
    ) -> Option<&UserMapping> {
        if is_self_reference(requested) {
            return sender_username.and_then(|sender| self.find_linear_user_by_identifier(sender));
        }
        self.find_linear_user_by_identifier(requested)
    }

    /// Lowercased handles that appear on more than one mapping.
    #[must_use]
    pub fn duplicate_handles(&self) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut dupes: Vec<String> = Vec::new();
        for user in &self.users {
            let handle = normalize_identifier(&user.telegram_username);
            if !seen.insert(handle.clone()) && !dupes.contains(&handle) {
                dupes.push(handle);
            }
        }
        dupes
    }
}

impl From<Vec<UserMapping>> for UserDirectory {
    fn from(users: Vec<UserMapping>) -> Self {
        Self::new(users)
    }
}
