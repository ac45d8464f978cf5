//! Integration test: a file-backed network survives reopening.

use profnet_core::config::ProfnetConfig;
use profnet_core::models::{ConnectionStatus, NewUser};
use profnet_network::NetworkEngine;

fn config_for(dir: &tempfile::TempDir) -> ProfnetConfig {
    let mut config = ProfnetConfig::default();
    config.storage.db_path = dir.path().join("profnet.db").display().to_string();
    config
}

#[test]
fn test_reopen_keeps_accounts_connections_and_messages() {
    let dir = tempfile::tempdir().unwrap();

    {
        let engine = NetworkEngine::open(config_for(&dir)).unwrap();
        for id in ["alice", "bob"] {
            engine
                .create_user(NewUser {
                    user_id: id.to_string(),
                    password: format!("{id}-pw"),
                    email: format!("{id}@example.com"),
                    name: id.to_string(),
                    date_of_birth: None,
                })
                .unwrap();
        }
        let alice = engine.log_in("alice", "alice-pw").unwrap();
        let bob = engine.log_in("bob", "bob-pw").unwrap();
        engine.send_connection_request(&alice, "bob").unwrap();
        engine
            .respond_to_request(&bob, "alice", ConnectionStatus::Accept)
            .unwrap();
        engine.send_message(&alice, "bob", "persisted").unwrap();
    }

    let engine = NetworkEngine::open(config_for(&dir)).unwrap();
    let bob = engine.log_in("bob", "bob-pw").unwrap();
    assert_eq!(engine.connections(&bob).unwrap(), vec!["alice"]);
    let inbox = engine.received_messages(&bob).unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].contents, "persisted");
}
