use std::io::Write;

use profnet_core::config::*;
use profnet_core::ProfnetError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ProfnetConfig::from_toml("").unwrap();

    assert_eq!(config.storage.db_path, "profnet.db");
    assert_eq!(config.storage.busy_timeout_ms, 5_000);

    assert_eq!(config.graph.max_hops, 3);
    assert!(config.graph.deadline().is_none());
    assert!(config.graph.max_fetches.is_none());

    assert_eq!(config.network.free_request_quota, 5);
    assert_eq!(config.network.request_max_hops, 2);

    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[storage]
db_path = "/var/lib/profnet/net.db"

[graph]
max_hops = 4
deadline_ms = 250

[network]
free_request_quota = 0
"#;
    let config = ProfnetConfig::from_toml(toml).unwrap();
    assert_eq!(config.storage.db_path, "/var/lib/profnet/net.db");
    assert_eq!(config.graph.max_hops, 4);
    assert_eq!(
        config.graph.deadline(),
        Some(std::time::Duration::from_millis(250))
    );
    assert_eq!(config.network.free_request_quota, 0);
    assert_eq!(config.network.request_max_hops, 2);
}

#[test]
fn config_rejects_zero_hop_bound() {
    let err = ProfnetConfig::from_toml("[graph]\nmax_hops = 0\n").unwrap_err();
    assert!(matches!(err, ProfnetError::ConfigError(_)));
}

#[test]
fn config_rejects_zero_request_hops() {
    let err = ProfnetConfig::from_toml("[network]\nrequest_max_hops = 0\n").unwrap_err();
    assert!(matches!(err, ProfnetError::ConfigError(_)));
}

#[test]
fn config_accepts_large_hop_bounds() {
    let config =
        ProfnetConfig::from_toml("[graph]\nmax_hops = 10\n\n[network]\nrequest_max_hops = 12\n")
            .unwrap();
    assert_eq!(config.graph.max_hops, 10);
    assert_eq!(config.network.request_max_hops, 12);
}

#[test]
fn config_rejects_malformed_toml() {
    let err = ProfnetConfig::from_toml("[graph\nmax_hops = ").unwrap_err();
    assert!(matches!(err, ProfnetError::ConfigError(_)));
}

#[test]
fn config_roundtrips_through_toml() {
    let config = ProfnetConfig::default();
    let serialized = toml::to_string(&config).unwrap();
    let parsed = ProfnetConfig::from_toml(&serialized).unwrap();
    assert_eq!(parsed.graph.max_hops, config.graph.max_hops);
    assert_eq!(parsed.storage.db_path, config.storage.db_path);
}

#[test]
fn config_from_missing_file_is_config_error() {
    let err = ProfnetConfig::from_file(std::path::Path::new("/nonexistent/profnet.toml"))
        .unwrap_err();
    assert!(matches!(err, ProfnetError::ConfigError(_)));
}

#[test]
fn config_from_file_reads_toml() {
    let path = std::env::temp_dir().join(format!("profnet-config-{}.toml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[observability]\nlog_level = \"debug\"\njson = false").unwrap();
    }
    let config = ProfnetConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(config.observability.log_level, "debug");
    assert!(!config.observability.json);
}
