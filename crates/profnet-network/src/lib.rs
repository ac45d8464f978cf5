//! # profnet-network
//!
//! The social-network operations: accounts, connection requests gated by
//! bounded-hop connectivity, and direct messages. Every acting operation
//! takes the caller's [`AuthenticatedUser`] explicitly.

pub mod accounts;
pub mod engine;
pub mod messages;
pub mod password;
pub mod requests;
pub mod session;
mod validation;

pub use engine::NetworkEngine;
pub use session::AuthenticatedUser;
