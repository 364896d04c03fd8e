// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::{ConnectionState, Message, MessageId, UserId};

/// Events dispatched to the `ClientDelegate` whenever the session's
/// observable state changes. Each event carries the full new value of the
/// facet it describes, so consumers can render it without querying back.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The state of the connection has changed.
    ConnectionStateChanged { state: ConnectionState },

    /// The visible message list has changed. Carries the complete list in
    /// display order, pending messages included.
    MessagesChanged { messages: Vec<Message> },

    /// The set of online users has changed.
    PresenceChanged { online_users: Vec<UserId> },

    /// The remotely displayed typing user has changed. `None` means nobody
    /// is typing.
    TypingChanged { typing_user: Option<UserId> },

    /// The set of pinned messages has changed.
    PinnedChanged { pinned: Vec<MessageId> },
}
