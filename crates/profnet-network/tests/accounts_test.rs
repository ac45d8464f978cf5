//! Integration test: registration, log-in, password change, search.

use chrono::NaiveDate;

use profnet_core::config::ProfnetConfig;
use profnet_core::errors::ProfnetError;
use profnet_core::models::NewUser;
use profnet_core::traits::IUserStorage;
use profnet_network::NetworkEngine;

fn engine() -> NetworkEngine {
    NetworkEngine::open_in_memory(ProfnetConfig::default()).unwrap()
}

fn new_user(id: &str, name: &str) -> NewUser {
    NewUser {
        user_id: id.to_string(),
        password: format!("{id}-pw"),
        email: format!("{id}@example.com"),
        name: name.to_string(),
        date_of_birth: None,
    }
}

#[test]
fn test_create_then_log_in() {
    let engine = engine();
    let mut input = new_user("alice", "Alice Smith");
    input.date_of_birth = NaiveDate::from_ymd_opt(1990, 4, 2);
    let user = engine.create_user(input).unwrap();
    assert_eq!(user.user_id, "alice");

    let session = engine.log_in("alice", "alice-pw").unwrap();
    assert_eq!(session.user_id(), "alice");

    let stored = engine.get_user("alice").unwrap().unwrap();
    assert_eq!(stored.name, "Alice Smith");
    assert_eq!(stored.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 2));
}

#[test]
fn test_password_is_not_stored_in_plain_text() {
    let engine = engine();
    engine.create_user(new_user("alice", "Alice")).unwrap();
    let creds = engine.storage().get_credentials("alice").unwrap().unwrap();
    assert_ne!(creds.password_hash, "alice-pw");
    assert!(!creds.password_hash.contains("alice-pw"));
}

#[test]
fn test_duplicate_user_rejected() {
    let engine = engine();
    engine.create_user(new_user("alice", "Alice")).unwrap();
    let err = engine.create_user(new_user("alice", "Other")).unwrap_err();
    assert!(matches!(err, ProfnetError::UserAlreadyExists { id } if id == "alice"));
}

#[test]
fn test_create_user_validates_fields() {
    let engine = engine();

    let mut blank_id = new_user("x", "X");
    blank_id.user_id = "  ".into();
    assert!(matches!(
        engine.create_user(blank_id).unwrap_err(),
        ProfnetError::InvalidInput { field, .. } if field == "user_id"
    ));

    let mut blank_pw = new_user("bob", "Bob");
    blank_pw.password = String::new();
    assert!(matches!(
        engine.create_user(blank_pw).unwrap_err(),
        ProfnetError::InvalidInput { field, .. } if field == "password"
    ));

    let mut bad_email = new_user("carol", "Carol");
    bad_email.email = "carol.example.com".into();
    assert!(matches!(
        engine.create_user(bad_email).unwrap_err(),
        ProfnetError::InvalidInput { field, .. } if field == "email"
    ));

    let mut long_id = new_user("d", "D");
    long_id.user_id = "d".repeat(65);
    assert!(engine.create_user(long_id).is_err());

    assert!(engine.get_user("bob").unwrap().is_none());
}

#[test]
fn test_log_in_failures_are_indistinguishable() {
    let engine = engine();
    engine.create_user(new_user("alice", "Alice")).unwrap();

    let wrong_password = engine.log_in("alice", "nope").unwrap_err();
    let unknown_user = engine.log_in("mallory", "alice-pw").unwrap_err();
    assert!(matches!(wrong_password, ProfnetError::InvalidCredentials));
    assert!(matches!(unknown_user, ProfnetError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[test]
fn test_change_password() {
    let engine = engine();
    engine.create_user(new_user("alice", "Alice")).unwrap();
    let session = engine.log_in("alice", "alice-pw").unwrap();

    engine.change_password(&session, "new-secret").unwrap();
    assert!(matches!(
        engine.log_in("alice", "alice-pw").unwrap_err(),
        ProfnetError::InvalidCredentials
    ));
    engine.log_in("alice", "new-secret").unwrap();

    assert!(engine.change_password(&session, "").is_err());
    engine.log_in("alice", "new-secret").unwrap();
}

#[test]
fn test_search_people_exact_name() {
    let engine = engine();
    engine.create_user(new_user("alice", "Sam Lee")).unwrap();
    engine.create_user(new_user("bob", "Sam Lee")).unwrap();
    engine.create_user(new_user("carol", "Sam Leet")).unwrap();

    let found = engine.search_people("Sam Lee").unwrap();
    let ids: Vec<_> = found.iter().map(|p| p.user_id.as_str()).collect();
    assert_eq!(ids, vec!["alice", "bob"]);
    assert_eq!(found[0].email, "alice@example.com");

    assert!(engine.search_people("Nobody").unwrap().is_empty());
    assert!(engine.search_people("").is_err());
}
