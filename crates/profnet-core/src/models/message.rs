use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageStatus {
    Delivered,
    Read,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::Read => "Read",
        }
    }

    pub fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "Delivered" => Some(Self::Delivered),
            "Read" => Some(Self::Read),
            _ => None,
        }
    }
}

/// Per-party soft deletion. Stored as an integer code 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeleteStatus {
    #[default]
    None,
    DeletedBySender,
    DeletedByReceiver,
    DeletedByBoth,
}

impl DeleteStatus {
    pub fn code(&self) -> i64 {
        match self {
            Self::None => 0,
            Self::DeletedBySender => 1,
            Self::DeletedByReceiver => 2,
            Self::DeletedByBoth => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::DeletedBySender),
            2 => Some(Self::DeletedByReceiver),
            3 => Some(Self::DeletedByBoth),
            _ => None,
        }
    }

    /// State after the sender deletes their copy. Idempotent.
    pub fn after_sender_delete(self) -> Self {
        match self {
            Self::None | Self::DeletedBySender => Self::DeletedBySender,
            Self::DeletedByReceiver | Self::DeletedByBoth => Self::DeletedByBoth,
        }
    }

    /// State after the receiver deletes their copy. Idempotent.
    pub fn after_receiver_delete(self) -> Self {
        match self {
            Self::None | Self::DeletedByReceiver => Self::DeletedByReceiver,
            Self::DeletedBySender | Self::DeletedByBoth => Self::DeletedByBoth,
        }
    }

    pub fn visible_to_sender(&self) -> bool {
        matches!(self, Self::None | Self::DeletedByReceiver)
    }

    pub fn visible_to_receiver(&self) -> bool {
        matches!(self, Self::None | Self::DeletedBySender)
    }
}

/// A stored message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub msg_id: i64,
    pub sender_id: String,
    pub receiver_id: String,
    pub contents: String,
    pub send_time: DateTime<Utc>,
    pub delete_status: DeleteStatus,
    pub status: MessageStatus,
}

impl Message {
    /// Whether `user_id` is a party to this message and still has it.
    pub fn visible_to(&self, user_id: &str) -> bool {
        (self.sender_id == user_id && self.delete_status.visible_to_sender())
            || (self.receiver_id == user_id && self.delete_status.visible_to_receiver())
    }
}

/// Insert shape; the store assigns `msg_id`.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub sender_id: String,
    pub receiver_id: String,
    pub contents: String,
    pub send_time: DateTime<Utc>,
}
