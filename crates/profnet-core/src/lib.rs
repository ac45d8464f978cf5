//! # profnet-core
//!
//! Foundation crate for ProfNet.
//! Defines the user/connection/message models, the storage and graph
//! collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ProfnetConfig;
pub use errors::{ProfnetError, ProfnetResult};
pub use models::{ConnectionEdge, ConnectionStatus, DeleteStatus, Message, MessageStatus, User};
