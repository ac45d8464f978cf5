/// ProfNet version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum length of a user login.
pub const MAX_USER_ID_LEN: usize = 64;

/// Maximum length of a message body in bytes.
pub const MAX_MESSAGE_LEN: usize = 4096;
