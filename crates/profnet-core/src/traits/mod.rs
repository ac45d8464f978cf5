mod connection_graph;
mod connection_storage;
mod message_storage;
mod user_storage;

pub use connection_graph::IConnectionGraph;
pub use connection_storage::IConnectionStorage;
pub use message_storage::IMessageStorage;
pub use user_storage::{IUserStorage, StoredCredentials};
