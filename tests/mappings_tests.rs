use std::collections::HashSet;

use user_mappings::{
    USER_MAPPINGS, UserDirectory, UserMapping, all_user_aliases, find_linear_user_by_identifier,
};

fn team() -> UserDirectory {
    UserDirectory::new(vec![
        UserMapping::new("alice_dev", "alice", "alice@yourcompany.com", &["alice", "al"]),
        UserMapping::new("bob_pm", "bob", "bob@yourcompany.com", &["bob", "bobby", "bobby"]),
        UserMapping::new("carol_qa", "Carol", "carol@yourcompany.com", &["al"]),
    ])
}

#[test]
fn test_lookup_single_record_example() {
    let directory = UserDirectory::new(vec![UserMapping::new("a_b", "alice", "a@x.com", &["al"])]);
    let record = &directory.users()[0];

    assert_eq!(directory.find_linear_user_by_identifier("@A_B"), Some(record));
    assert_eq!(directory.find_linear_user_by_identifier("AL"), Some(record));
    assert_eq!(directory.find_linear_user_by_identifier("bob"), None);
}

#[test]
fn test_lookup_by_handle_any_case() {
    let directory = team();
    for user in directory.users() {
        let handle = &user.telegram_username;
        for variant in [handle.clone(), handle.to_uppercase(), handle.to_lowercase()] {
            assert_eq!(
                directory.find_linear_user_by_identifier(&variant),
                Some(user),
                "Lookup by {variant} should find {handle}"
            );
        }
    }
}

#[test]
fn test_leading_at_is_ignored() {
    let directory = team();
    for id in ["alice_dev", "BOB", "bobby", "Carol", "missing"] {
        assert_eq!(
            directory.find_linear_user_by_identifier(&format!("@{id}")),
            directory.find_linear_user_by_identifier(id)
        );
    }
}

#[test]
fn test_only_one_leading_at_is_stripped() {
    let directory = team();
    assert!(directory.find_linear_user_by_identifier("@@alice_dev").is_none());
}

#[test]
fn test_lookup_by_name_email_and_alias() {
    let directory = team();
    let bob = &directory.users()[1];

    assert_eq!(directory.find_linear_user_by_identifier("Bob"), Some(bob));
    assert_eq!(
        directory.find_linear_user_by_identifier("BOB@YourCompany.com"),
        Some(bob)
    );
    assert_eq!(directory.find_linear_user_by_identifier("bobby"), Some(bob));
    assert_eq!(
        directory.find_linear_user_by_identifier("carol").map(|u| u.linear_name.as_str()),
        Some("Carol")
    );
}

#[test]
fn test_first_match_wins() {
    let directory = team();
    let found = directory.find_linear_user_by_identifier("al").unwrap();
    assert_eq!(found.telegram_username, "alice_dev");
}

#[test]
fn test_no_partial_matches() {
    let directory = team();
    for id in ["ali", "alice_", "yourcompany.com", "", "@"] {
        assert!(
            directory.find_linear_user_by_identifier(id).is_none(),
            "{id:?} should not match"
        );
    }
}

#[test]
fn test_all_user_aliases_dedup_in_order() {
    let aliases = team().all_user_aliases();
    assert_eq!(
        aliases,
        vec!["alice_dev", "alice", "al", "bob_pm", "bob", "bobby", "carol_qa", "Carol"]
    );

    let unique: HashSet<&String> = aliases.iter().collect();
    assert_eq!(unique.len(), aliases.len());
}

#[test]
fn test_all_user_aliases_covers_every_name() {
    let directory = team();
    let aliases = directory.all_user_aliases();
    for user in directory.users() {
        assert!(aliases.contains(&user.telegram_username));
        assert!(aliases.contains(&user.linear_name));
        for alias in &user.aliases {
            assert!(aliases.contains(alias));
        }
        assert!(!aliases.contains(&user.linear_email));
    }
}

#[test]
fn test_builtin_table_helpers() {
    assert!(!USER_MAPPINGS.is_empty());

    let example = find_linear_user_by_identifier("@Example_User").unwrap();
    assert_eq!(example.linear_email, "example@yourcompany.com");
    assert_eq!(find_linear_user_by_identifier("ex"), Some(example));
    assert!(find_linear_user_by_identifier("nobody_here").is_none());

    assert_eq!(all_user_aliases(), vec!["example_user", "example", "ex"]);
    assert_eq!(UserDirectory::builtin().users(), USER_MAPPINGS.as_slice());
}

#[test]
fn test_resolve_assignee() {
    let directory = team();

    let me = directory.resolve_assignee("assign me", Some("@bob_pm")).unwrap();
    assert_eq!(me.linear_name, "bob");

    let named = directory.resolve_assignee("Alice", Some("bob_pm")).unwrap();
    assert_eq!(named.linear_name, "alice");

    assert!(directory.resolve_assignee("for me", None).is_none());
    assert!(directory.resolve_assignee("me", Some("stranger")).is_none());
}

#[test]
fn test_duplicate_handles() {
    let directory = UserDirectory::new(vec![
        UserMapping::new("dup", "one", "one@x.com", &[]),
        UserMapping::new("other", "two", "two@x.com", &[]),
        UserMapping::new("DUP", "three", "three@x.com", &[]),
        UserMapping::new("dup", "four", "four@x.com", &[]),
    ]);
    assert_eq!(directory.duplicate_handles(), vec!["dup"]);
    assert!(team().duplicate_handles().is_empty());

    // Duplicates are reported, not rejected: the first entry still wins
    assert_eq!(
        directory.find_linear_user_by_identifier("dup").map(|u| u.linear_name.as_str()),
        Some("one")
    );
}
