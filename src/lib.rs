/// User mappings - resolves Telegram usernames and aliases to Linear users.
///
/// The crate holds a hand-edited table of team members and the helpers a
/// message-processing pipeline needs to turn a sender or a mentioned name
/// into a Linear identity.
///
/// # Example
///
/// ```
/// use user_mappings::{UserDirectory, UserMapping};
///
/// let directory = UserDirectory::new(vec![UserMapping::new(
///     "a_b",
///     "alice",
///     "a@x.com",
///     &["al"],
/// )]);
///
/// assert!(directory.find_linear_user_by_identifier("@A_B").is_some());
/// assert!(directory.find_linear_user_by_identifier("AL").is_some());
/// assert!(directory.find_linear_user_by_identifier("bob").is_none());
/// assert_eq!(directory.all_user_aliases(), vec!["a_b", "alice", "al"]);
/// ```
// Module declarations
pub mod core;
pub mod errors;
pub mod loader;
pub mod mappings;
pub mod prompt;
pub mod utils;

pub use crate::core::config::MappingConfig;
pub use crate::core::models::UserMapping;
pub use errors::MappingError;
pub use mappings::{USER_MAPPINGS, UserDirectory, all_user_aliases, find_linear_user_by_identifier};

/// Configure structured logging with JSON format.
///
/// Call once at startup of the binary embedding this crate.
///
/// # Example
///
/// ```
/// user_mappings::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
