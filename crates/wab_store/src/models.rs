//! Domain models handed to the presentation layer.
//!
//! Serialized field names are camelCase to match what the UI consumes
//! (`lastMessageText`, `chatJid`, ...).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One conversation, individual or group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Unique conversation identifier, e.g. `123@s.whatsapp.net` or
    /// `456-789@g.us`.
    pub jid: String,
    /// Resolved display name: group subject, contact name, or the jid
    /// local part as a last resort. May be absent for unnamed groups.
    pub name: Option<String>,
    pub last_message_text: Option<String>,
    /// Epoch millis of the most recent activity.
    pub last_message_timestamp: i64,
}

/// One message, owned by the chat identified by `chat_jid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub chat_jid: String,
    pub from_me: bool,
    /// Numeric delivery/read state as stored by the app.
    pub status: i64,
    pub text: Option<String>,
    /// Epoch millis.
    pub timestamp: i64,
    pub message_type: i64,
    pub media_caption: Option<String>,
}

/// Full extraction result: chats ordered by recency, and per-chat messages
/// in chronological order. A chat with no messages keeps an empty entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatData {
    pub chats: Vec<Chat>,
    pub messages: HashMap<String, Vec<Message>>,
}
