//! Integration test: connection request storage and accepted-edge lookup.

use chrono::Utc;

use profnet_core::models::{ConnectionEdge, ConnectionStatus, User};
use profnet_core::traits::{IConnectionGraph, IConnectionStorage, IUserStorage, StoredCredentials};
use profnet_storage::StorageEngine;

fn engine_with_users(ids: &[&str]) -> StorageEngine {
    let engine = StorageEngine::open_in_memory().unwrap();
    for id in ids {
        let user = User {
            user_id: id.to_string(),
            email: format!("{id}@example.com"),
            name: id.to_uppercase(),
            date_of_birth: None,
            created_at: Utc::now(),
        };
        let creds = StoredCredentials {
            password_hash: "h".into(),
            salt: "s".into(),
        };
        engine.create_user(&user, &creds).unwrap();
    }
    engine
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn test_connection_upsert_and_get() {
    let engine = engine_with_users(&["a", "b"]);
    engine
        .upsert_connection(&ConnectionEdge::new("a", "b", ConnectionStatus::Request))
        .unwrap();

    let edge = engine.get_connection("a", "b").unwrap().unwrap();
    assert_eq!(edge.status, ConnectionStatus::Request);
    assert!(engine.get_connection("b", "a").unwrap().is_none());

    engine
        .upsert_connection(&ConnectionEdge::new("a", "b", ConnectionStatus::Reject))
        .unwrap();
    let edge = engine.get_connection("a", "b").unwrap().unwrap();
    assert_eq!(edge.status, ConnectionStatus::Reject);
}

#[test]
fn test_update_status_reports_missing_edge() {
    let engine = engine_with_users(&["a", "b"]);
    assert!(!engine
        .update_connection_status("a", "b", ConnectionStatus::Accept)
        .unwrap());

    engine
        .upsert_connection(&ConnectionEdge::new("a", "b", ConnectionStatus::Request))
        .unwrap();
    assert!(engine
        .update_connection_status("a", "b", ConnectionStatus::Accept)
        .unwrap());
    assert_eq!(
        engine.get_connection("a", "b").unwrap().unwrap().status,
        ConnectionStatus::Accept
    );
}

#[test]
fn test_accepted_edges_are_undirected() {
    let engine = engine_with_users(&["a", "b", "c", "d"]);
    engine
        .upsert_connection(&ConnectionEdge::new("a", "b", ConnectionStatus::Accept))
        .unwrap();
    engine
        .upsert_connection(&ConnectionEdge::new("c", "a", ConnectionStatus::Accept))
        .unwrap();
    engine
        .upsert_connection(&ConnectionEdge::new("a", "d", ConnectionStatus::Request))
        .unwrap();

    assert_eq!(
        sorted(engine.fetch_accepted_edges("a").unwrap()),
        vec!["b".to_string(), "c".to_string()]
    );
    assert_eq!(engine.fetch_accepted_edges("b").unwrap(), vec!["a".to_string()]);
    assert!(engine.fetch_accepted_edges("d").unwrap().is_empty());
}

#[test]
fn test_reverse_duplicate_edge_returns_duplicates_but_counts_once() {
    let engine = engine_with_users(&["a", "b"]);
    engine
        .upsert_connection(&ConnectionEdge::new("a", "b", ConnectionStatus::Accept))
        .unwrap();
    engine
        .upsert_connection(&ConnectionEdge::new("b", "a", ConnectionStatus::Accept))
        .unwrap();

    assert_eq!(
        engine.fetch_accepted_edges("a").unwrap(),
        vec!["b".to_string(), "b".to_string()]
    );
    assert_eq!(engine.accepted_count("a").unwrap(), 1);
}

#[test]
fn test_incoming_pending_requests() {
    let engine = engine_with_users(&["a", "b", "c"]);
    engine
        .upsert_connection(&ConnectionEdge::new("a", "c", ConnectionStatus::Request))
        .unwrap();
    engine
        .upsert_connection(&ConnectionEdge::new("b", "c", ConnectionStatus::Accept))
        .unwrap();

    let pending = engine
        .incoming_connections("c", ConnectionStatus::Request)
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].user_id, "a");
    assert_eq!(pending[0].connection_id, "c");

    assert_eq!(engine.accepted_count("c").unwrap(), 1);
    assert_eq!(engine.accepted_count("a").unwrap(), 0);
}

#[test]
fn test_connection_to_unknown_user_violates_foreign_key() {
    let engine = engine_with_users(&["a"]);
    let result =
        engine.upsert_connection(&ConnectionEdge::new("a", "ghost", ConnectionStatus::Request));
    assert!(result.is_err());
}
