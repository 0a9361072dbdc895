/// Lowercase an identifier and drop a single leading `@`.
///
/// ```
/// use user_mappings::utils::identifiers::normalize_identifier;
///
/// assert_eq!(normalize_identifier("@Alice_Dev"), "alice_dev");
/// assert_eq!(normalize_identifier("@@bob"), "@bob");
/// assert_eq!(normalize_identifier("bob@x.com"), "bob@x.com");
/// ```
#[must_use]
pub fn normalize_identifier(identifier: &str) -> String {
    let lowered = identifier.to_lowercase();
    match lowered.strip_prefix('@') {
        Some(rest) => rest.to_string(),
        None => lowered,
    }
}

/// Hide the local part of an email for log output.
#[must_use]
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}
