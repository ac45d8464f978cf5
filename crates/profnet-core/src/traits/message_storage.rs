use crate::errors::ProfnetResult;
use crate::models::{DeleteStatus, Message, MessageStatus, NewMessage};

/// Message persistence.
pub trait IMessageStorage: Send + Sync {
    /// Insert and return the stored message with its assigned id.
    fn insert_message(&self, message: &NewMessage) -> ProfnetResult<Message>;
    fn get_message(&self, msg_id: i64) -> ProfnetResult<Option<Message>>;

    /// Messages sent by `user_id` that the sender has not deleted.
    fn sent_messages(&self, user_id: &str) -> ProfnetResult<Vec<Message>>;
    /// Messages received by `user_id` that the receiver has not deleted.
    fn received_messages(&self, user_id: &str) -> ProfnetResult<Vec<Message>>;

    fn set_message_status(&self, msg_id: i64, status: MessageStatus) -> ProfnetResult<()>;
    fn set_delete_status(&self, msg_id: i64, status: DeleteStatus) -> ProfnetResult<()>;
}
