// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "profnet.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Graph ---
pub const DEFAULT_MAX_HOPS: usize = 3;

// --- Network ---
pub const DEFAULT_FREE_REQUEST_QUOTA: usize = 5;
pub const DEFAULT_REQUEST_MAX_HOPS: usize = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
