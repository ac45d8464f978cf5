//! # profnet-graph
//!
//! Bounded breadth-first connectivity checks ("are these two users within
//! N connections of each other?") over any [`IConnectionGraph`] collaborator.
//!
//! [`IConnectionGraph`]: profnet_core::traits::IConnectionGraph

pub mod checker;
pub mod traversal;

pub use checker::ConnectivityChecker;
pub use traversal::{ConnectivityReport, Reachability, TraversalConfig, UnknownReason};
