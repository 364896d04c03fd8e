// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeSet;

use crate::domain::UserId;

/// The set of participants currently online in the conversation, derived
/// from snapshot and delta events. All operations report whether the set
/// actually changed so that callers only emit change events on a diff.
#[derive(Debug, Default)]
pub struct PresenceSet {
    online: BTreeSet<UserId>,
}

impl PresenceSet {
    /// Replaces the set atomically.
    pub fn apply_snapshot(&mut self, users: impl IntoIterator<Item = UserId>) -> bool {
        let next = users.into_iter().collect::<BTreeSet<_>>();
        if next == self.online {
            return false;
        }
        self.online = next;
        true
    }

    pub fn apply_join(&mut self, user: UserId) -> bool {
        self.online.insert(user)
    }

    pub fn apply_leave(&mut self, user: &UserId) -> bool {
        self.online.remove(user)
    }

    pub fn online_users(&self) -> Vec<UserId> {
        self.online.iter().copied().collect()
    }
}
