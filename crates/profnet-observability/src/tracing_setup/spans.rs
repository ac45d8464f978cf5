//! Span definitions per operation: connectivity, account, request, message.

/// Create a connectivity-check span.
#[macro_export]
macro_rules! connectivity_span {
    ($source:expr, $target:expr, $max_hops:expr) => {
        tracing::info_span!("profnet.connectivity", source = %$source, target = %$target, max_hops = $max_hops)
    };
}

/// Create an account operation span.
#[macro_export]
macro_rules! account_span {
    ($operation:expr, $user_id:expr) => {
        tracing::info_span!("profnet.account", operation = $operation, user_id = %$user_id)
    };
}

/// Create a connection-request span.
#[macro_export]
macro_rules! request_span {
    ($operation:expr, $actor:expr, $other:expr) => {
        tracing::info_span!("profnet.request", operation = $operation, actor = %$actor, other = %$other)
    };
}

/// Create a message operation span.
#[macro_export]
macro_rules! message_span {
    ($operation:expr, $actor:expr) => {
        tracing::info_span!("profnet.message", operation = $operation, actor = %$actor)
    };
}
