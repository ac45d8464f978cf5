//! Direct messages with per-party soft deletion.

use chrono::Utc;

use profnet_core::errors::{ProfnetError, ProfnetResult};
use profnet_core::models::{Message, MessageStatus, NewMessage};
use profnet_core::traits::IMessageStorage;
use profnet_observability::message_span;

use crate::engine::NetworkEngine;
use crate::session::AuthenticatedUser;
use crate::validation;

impl NetworkEngine {
    pub fn send_message(
        &self,
        actor: &AuthenticatedUser,
        receiver: &str,
        contents: &str,
    ) -> ProfnetResult<Message> {
        let _span = message_span!("send", actor).entered();

        validation::require_non_empty("receiver", receiver)?;
        validation::require_message_body(contents)?;
        self.require_user(receiver)?;

        let message = self.storage.insert_message(&NewMessage {
            sender_id: actor.user_id().to_string(),
            receiver_id: receiver.to_string(),
            contents: contents.to_string(),
            send_time: Utc::now(),
        })?;
        tracing::info!(msg_id = message.msg_id, receiver, "message sent");
        Ok(message)
    }

    pub fn sent_messages(&self, actor: &AuthenticatedUser) -> ProfnetResult<Vec<Message>> {
        self.storage.sent_messages(actor.user_id())
    }

    pub fn received_messages(&self, actor: &AuthenticatedUser) -> ProfnetResult<Vec<Message>> {
        self.storage.received_messages(actor.user_id())
    }

    /// Open a message. The receiver opening it marks it read.
    pub fn read_message(&self, actor: &AuthenticatedUser, msg_id: i64) -> ProfnetResult<Message> {
        let _span = message_span!("read", actor).entered();

        let mut message = self.visible_message(actor, msg_id)?;
        if message.receiver_id == actor.user_id() && message.status == MessageStatus::Delivered {
            self.storage.set_message_status(msg_id, MessageStatus::Read)?;
            message.status = MessageStatus::Read;
            tracing::debug!(msg_id, "message marked read");
        }
        Ok(message)
    }

    /// Remove the message from the actor's view. A message to oneself is
    /// deleted for both parties at once.
    pub fn delete_message(&self, actor: &AuthenticatedUser, msg_id: i64) -> ProfnetResult<()> {
        let _span = message_span!("delete", actor).entered();

        let message = self.visible_message(actor, msg_id)?;
        let mut status = message.delete_status;
        if message.sender_id == actor.user_id() {
            status = status.after_sender_delete();
        }
        if message.receiver_id == actor.user_id() {
            status = status.after_receiver_delete();
        }
        self.storage.set_delete_status(msg_id, status)?;

        tracing::info!(msg_id, delete_status = ?status, "message deleted");
        Ok(())
    }

    fn visible_message(&self, actor: &AuthenticatedUser, msg_id: i64) -> ProfnetResult<Message> {
        match self.storage.get_message(msg_id)? {
            Some(message) if message.visible_to(actor.user_id()) => Ok(message),
            _ => Err(ProfnetError::MessageNotFound { id: msg_id }),
        }
    }
}
