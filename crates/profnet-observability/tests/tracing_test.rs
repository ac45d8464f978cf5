use profnet_core::config::ObservabilityConfig;
use profnet_observability::{account_span, connectivity_span, message_span, request_span};

#[test]
fn span_macros_name_each_operation() {
    let subscriber = tracing_subscriber::registry();
    tracing::subscriber::with_default(subscriber, || {
        let cases = [
            (connectivity_span!("a", "b", 2usize), "profnet.connectivity"),
            (account_span!("log_in", "a"), "profnet.account"),
            (request_span!("send", "a", "b"), "profnet.request"),
            (message_span!("read", "a"), "profnet.message"),
        ];
        for (span, expected) in cases {
            let meta = span.metadata().expect("span should be enabled");
            assert_eq!(meta.name(), expected);
        }
    });
}

#[test]
fn global_subscriber_installs_once() {
    let config = ObservabilityConfig {
        log_level: "warn".to_string(),
        json: true,
    };
    assert!(profnet_observability::init_tracing(&config).is_ok());
    assert!(profnet_observability::init_tracing_with_filter("debug").is_err());
    tracing::warn!("tracing initialized");
}
