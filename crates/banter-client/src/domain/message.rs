// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use url::Url;

use crate::domain::{Emoji, MessageId, MessageLocalId, UserId};

/// A message as consumers of the session see it. Derived from the store's
/// internal record plus the pinned registry at snapshot time.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// The server-assigned ID. `None` while the message is pending.
    pub id: Option<MessageId>,
    /// The correlation token of a locally-originated message.
    pub local_id: Option<MessageLocalId>,
    pub from: UserId,
    pub content: Option<String>,
    pub file_url: Option<Url>,
    pub timestamp: DateTime<Utc>,
    pub reactions: Vec<Emoji>,
    /// Whether the message awaits its server confirmation.
    pub is_pending: bool,
    pub is_pinned: bool,
}
