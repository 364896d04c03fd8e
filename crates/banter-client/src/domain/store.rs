// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use url::Url;

use crate::domain::{
    Emoji, Message, MessageId, MessageKey, MessageLocalId, PinnedRegistry, UserId,
};
use crate::wire::WireMessage;

/// The ordered, deduplicated collection of messages of one conversation.
///
/// Records keep their position in server-observed arrival order. The index
/// maps both server IDs and local correlation tokens to positions so that a
/// confirmation can replace its optimistic counterpart in place instead of
/// appending a duplicate.
#[derive(Debug, Default)]
pub struct MessageStore {
    records: Vec<MessageRecord>,
    index: HashMap<MessageKey, usize>,
}

#[derive(Debug, Clone, PartialEq)]
struct MessageRecord {
    id: Option<MessageId>,
    local_id: Option<MessageLocalId>,
    from: UserId,
    content: Option<String>,
    file_url: Option<Url>,
    timestamp: DateTime<Utc>,
    reactions: Vec<Emoji>,
    is_pending: bool,
}

impl MessageRecord {
    fn confirmed(message: &WireMessage) -> Self {
        MessageRecord {
            id: Some(message.id),
            local_id: message.client_id.clone(),
            from: message.sender,
            content: message.content.clone(),
            file_url: message.file_url.clone(),
            timestamp: message.created_at,
            reactions: message.reactions.clone(),
            is_pending: false,
        }
    }

    fn to_message(&self, pins: &PinnedRegistry) -> Message {
        Message {
            id: self.id,
            local_id: self.local_id.clone(),
            from: self.from,
            content: self.content.clone(),
            file_url: self.file_url.clone(),
            timestamp: self.timestamp,
            reactions: self.reactions.clone(),
            is_pending: self.is_pending,
            is_pinned: self
                .id
                .map(|id| pins.contains(&id))
                .unwrap_or_default(),
        }
    }
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &MessageId) -> bool {
        self.index.contains_key(&MessageKey::Server(*id))
    }

    /// Replaces the store contents with the history the server returned.
    /// Returns `false` if the visible state did not change.
    pub fn seed(&mut self, messages: Vec<WireMessage>) -> bool {
        let records = messages
            .iter()
            .map(MessageRecord::confirmed)
            .collect::<Vec<_>>();

        if records == self.records {
            return false;
        }

        self.index.clear();
        for (idx, message) in messages.iter().enumerate() {
            self.index.insert(MessageKey::Server(message.id), idx);
            if let Some(local_id) = &message.client_id {
                self.index.insert(MessageKey::Local(local_id.clone()), idx);
            }
        }
        self.records = records;
        true
    }

    /// Appends a provisional, locally-originated message awaiting its server
    /// confirmation.
    pub fn append_optimistic(
        &mut self,
        local_id: MessageLocalId,
        from: UserId,
        content: Option<String>,
        file_url: Option<Url>,
        timestamp: DateTime<Utc>,
    ) {
        self.index
            .insert(MessageKey::Local(local_id.clone()), self.records.len());
        self.records.push(MessageRecord {
            id: None,
            local_id: Some(local_id),
            from,
            content,
            file_url,
            timestamp,
            reactions: vec![],
            is_pending: true,
        });
    }

    /// Merges a server-confirmed message.
    ///
    /// A message whose correlation token matches a pending record replaces
    /// that record in place, preserving its position. A known server ID
    /// updates the existing record. Anything else is appended at the end.
    /// Returns `false` if the store did not change, e.g. on an identical
    /// re-delivery.
    pub fn append_authoritative(&mut self, message: &WireMessage) -> bool {
        let record = MessageRecord::confirmed(message);

        if let Some(&idx) = self.index.get(&MessageKey::Server(message.id)) {
            if self.records[idx] == record {
                return false;
            }
            self.records[idx] = record;
            return true;
        }

        if let Some(local_id) = &message.client_id {
            if let Some(idx) = self.index.remove(&MessageKey::Local(local_id.clone())) {
                self.records[idx] = record;
                self.index.insert(MessageKey::Server(message.id), idx);
                return true;
            }
        }

        self.index
            .insert(MessageKey::Server(message.id), self.records.len());
        self.records.push(record);
        true
    }

    /// Removes a message. Returns `true` if it was present.
    pub fn remove(&mut self, id: &MessageId) -> bool {
        let Some(idx) = self.index.remove(&MessageKey::Server(*id)) else {
            return false;
        };

        let record = self.records.remove(idx);
        if let Some(local_id) = record.local_id {
            self.index.remove(&MessageKey::Local(local_id));
        }
        for position in self.index.values_mut() {
            if *position > idx {
                *position -= 1;
            }
        }
        true
    }

    /// Appends a reaction to a confirmed message. Returns `false` if the
    /// message is unknown.
    pub fn react(&mut self, id: &MessageId, emoji: Emoji) -> bool {
        let Some(&idx) = self.index.get(&MessageKey::Server(*id)) else {
            return false;
        };
        self.records[idx].reactions.push(emoji);
        true
    }

    /// The messages in server-observed arrival order.
    pub fn snapshot(&self, pins: &PinnedRegistry) -> Vec<Message> {
        self.records
            .iter()
            .map(|record| record.to_message(pins))
            .collect()
    }
}
