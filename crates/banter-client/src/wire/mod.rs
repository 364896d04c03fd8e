// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{Emoji, GroupId, MessageId, MessageLocalId, UserId};

/// A message as the server transmits it, both in pushed events and in the
/// history endpoint's response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub id: MessageId,
    pub sender: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<Url>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reactions: Vec<Emoji>,
    /// Echo of the correlation token the sending client attached to its
    /// `chat_message` command. Absent for messages from other clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<MessageLocalId>,
}

/// Events pushed by the server over the socket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    NewMessage { message: WireMessage },
    MessageDeleted { message_id: MessageId },
    Typing { user_id: UserId, is_typing: bool },
    Presence { online_users: Vec<UserId> },
    UserJoined { user_id: UserId },
    UserLeft { user_id: UserId },
    MessagePinned { message: WireMessage },
    MessageUnpinned { message_id: MessageId },
    Error { error: String },
}

/// Commands the client sends over the socket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientCommand {
    Presence {
        action: PresenceAction,
        user_id: UserId,
    },
    Typing {
        is_typing: bool,
    },
    ChatMessage {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_url: Option<Url>,
        group_id: GroupId,
        client_id: MessageLocalId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceAction {
    Join,
}
