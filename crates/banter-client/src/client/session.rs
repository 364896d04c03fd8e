// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::warn;

use crate::domain::{
    ConnectionState, MessageStore, PinnedRegistry, PresenceSet, TypingState, UserId,
};
use crate::wire::{ServerEvent, WireMessage};
use crate::ClientEvent;

/// The complete mutable state of a session, guarded by a single lock in the
/// client. Mutators return the `ClientEvent`s describing what changed; the
/// caller dispatches them after releasing the lock.
#[derive(Debug, Default)]
pub(super) struct SessionState {
    pub connection_state: ConnectionState,
    pub messages: MessageStore,
    pub presence: PresenceSet,
    pub typing: TypingState,
    pub pins: PinnedRegistry,
}

impl SessionState {
    pub(super) fn set_connection_state(&mut self, state: ConnectionState) -> Option<ClientEvent> {
        if self.connection_state == state {
            return None;
        }
        self.connection_state = state;
        Some(ClientEvent::ConnectionStateChanged { state })
    }

    /// Replaces the message list with freshly loaded history.
    pub(super) fn seed_history(&mut self, messages: Vec<WireMessage>) -> Option<ClientEvent> {
        if self.messages.seed(messages) {
            return Some(self.messages_changed());
        }
        None
    }

    /// Resets the typing facet and transitions the connection state after the
    /// socket went away. Skipped facets produce no events.
    pub(super) fn handle_connection_drop(&mut self, next: ConnectionState) -> Vec<ClientEvent> {
        let mut events = Vec::new();
        self.typing.reset_local();
        if self.typing.clear_remote() {
            events.push(self.typing_changed());
        }
        events.extend(self.set_connection_state(next));
        events
    }

    /// Applies one server-pushed event. Events for distinct facets are
    /// returned in a fixed order: messages, presence, typing, pins.
    pub(super) fn apply_server_event(
        &mut self,
        own_user: UserId,
        event: ServerEvent,
    ) -> Vec<ClientEvent> {
        let mut events = Vec::new();

        match event {
            ServerEvent::NewMessage { message } => {
                let sender = message.sender;
                if self.messages.append_authoritative(&message) {
                    events.push(self.messages_changed());
                }
                // The author of a fresh message is evidently done typing.
                if self.typing.typing_user() == Some(sender) {
                    self.typing.clear_remote();
                    events.push(self.typing_changed());
                }
            }
            ServerEvent::MessageDeleted { message_id } => {
                if self.messages.remove(&message_id) {
                    events.push(self.messages_changed());
                }
                if self.pins.cascade_removal(&message_id) {
                    events.push(self.pinned_changed());
                }
            }
            ServerEvent::Typing { user_id, is_typing } => {
                if user_id == own_user {
                    // The server echoes our own typing frames back at us.
                    return events;
                }
                if self.typing.apply_remote(user_id, is_typing) {
                    events.push(self.typing_changed());
                }
            }
            ServerEvent::Presence { online_users } => {
                if self.presence.apply_snapshot(online_users) {
                    events.push(self.presence_changed());
                }
            }
            ServerEvent::UserJoined { user_id } => {
                if self.presence.apply_join(user_id) {
                    events.push(self.presence_changed());
                }
            }
            ServerEvent::UserLeft { user_id } => {
                if self.presence.apply_leave(&user_id) {
                    events.push(self.presence_changed());
                }
            }
            ServerEvent::MessagePinned { message } => {
                let message_id = message.id;
                if self.messages.append_authoritative(&message) {
                    events.push(self.messages_changed());
                }
                if self.pins.confirm(message_id, true) {
                    events.push(self.pinned_changed());
                }
            }
            ServerEvent::MessageUnpinned { message_id } => {
                if self.pins.confirm(message_id, false) {
                    events.push(self.pinned_changed());
                }
            }
            ServerEvent::Error { error } => {
                warn!("Server reported an error: {error}");
            }
        }

        events
    }

    pub(super) fn messages_changed(&self) -> ClientEvent {
        ClientEvent::MessagesChanged {
            messages: self.messages.snapshot(&self.pins),
        }
    }

    pub(super) fn presence_changed(&self) -> ClientEvent {
        ClientEvent::PresenceChanged {
            online_users: self.presence.online_users(),
        }
    }

    pub(super) fn typing_changed(&self) -> ClientEvent {
        ClientEvent::TypingChanged {
            typing_user: self.typing.typing_user(),
        }
    }

    pub(super) fn pinned_changed(&self) -> ClientEvent {
        ClientEvent::PinnedChanged {
            pinned: self.pins.pinned_ids(),
        }
    }
}
