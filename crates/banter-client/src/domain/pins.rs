// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeSet;

use crate::domain::MessageId;

/// The set of pinned messages, kept as message IDs.
///
/// Local toggles apply immediately; a server confirmation sets the
/// membership to the confirmed value and thereby always wins over a stale
/// optimistic guess. The registry stays a subset of the message store: the
/// session cascades message removal into `cascade_removal` and rejects
/// toggles for unknown messages before they reach this type.
#[derive(Debug, Default)]
pub struct PinnedRegistry {
    pinned: BTreeSet<MessageId>,
}

impl PinnedRegistry {
    /// Flips membership and returns the new value.
    pub fn toggle(&mut self, id: MessageId) -> bool {
        if self.pinned.remove(&id) {
            return false;
        }
        self.pinned.insert(id);
        true
    }

    /// Applies the server-confirmed membership. Returns `true` if the
    /// registry changed.
    pub fn confirm(&mut self, id: MessageId, pinned: bool) -> bool {
        if pinned {
            self.pinned.insert(id)
        } else {
            self.pinned.remove(&id)
        }
    }

    /// Unpins a message that was removed from the store. Returns `true` if
    /// it was pinned.
    pub fn cascade_removal(&mut self, id: &MessageId) -> bool {
        self.pinned.remove(id)
    }

    pub fn contains(&self, id: &MessageId) -> bool {
        self.pinned.contains(id)
    }

    pub fn pinned_ids(&self) -> Vec<MessageId> {
        self.pinned.iter().copied().collect()
    }
}
