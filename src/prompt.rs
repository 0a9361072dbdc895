use std::collections::HashSet;
use std::fmt::Write as _;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::mappings::UserDirectory;

/// Max length of a single alias or name once inserted into a prompt
pub const MAX_ALIAS_LEN: usize = 64;

/// Header line for the team member section of an AI prompt
pub const TEAM_PROMPT_HEADER: &str = "Known team members (Linear name, Telegram username, aliases):";

static SELF_REFERENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?:assign\s+(?:to\s+)?|for\s+)?me|myself|i)$")
        .expect("static regex compile")
});

/// True when `text` is the sender talking about themselves
/// ("me", "for me", "assign me", "assign to me", "myself", "I").
#[must_use]
pub fn is_self_reference(text: &str) -> bool {
    SELF_REFERENCE_RE.is_match(text.trim())
}

/// Remove control characters and hard-truncate a name before it goes into a prompt
#[must_use]
pub fn sanitize_alias(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control())
        .take(MAX_ALIAS_LEN)
        .collect()
}

/// Render the directory as a prompt section the AI can use to match names.
///
/// Aliases already shown on a line (as the name, the handle or an earlier
/// alias) are left out, compared by exact string.
///
/// Returns an empty string for an empty directory.
#[must_use]
pub fn team_members_prompt(directory: &UserDirectory) -> String {
    if directory.is_empty() {
        return String::new();
    }

    let mut out = String::from(TEAM_PROMPT_HEADER);
    for user in directory.users() {
        let _ = write!(
            out,
            "\n- {} (@{})",
            sanitize_alias(&user.linear_name),
            sanitize_alias(&user.telegram_username)
        );
        let mut shown: HashSet<&str> =
            HashSet::from([user.linear_name.as_str(), user.telegram_username.as_str()]);
        let aliases: Vec<String> = user
            .aliases
            .iter()
            .map(String::as_str)
            .filter(|alias| shown.insert(*alias))
            .map(sanitize_alias)
            .collect();
        if !aliases.is_empty() {
            let _ = write!(out, ": aliases {}", aliases.join(", "));
        }
    }
    out
}
