mod connection;
mod message;
mod user;

pub use connection::{ConnectionEdge, ConnectionStatus};
pub use message::{DeleteStatus, Message, MessageStatus, NewMessage};
pub use user::{NewUser, PersonSummary, User};
