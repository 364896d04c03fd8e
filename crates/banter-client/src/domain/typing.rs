// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::UserId;

/// Typing state of the conversation.
///
/// The local side is debounced: one `typing: true` signal per burst of
/// keystrokes, one `typing: false` once the idle timer expires. The remote
/// side mirrors the peer's signals and has no timeout of its own; a peer
/// that never sends `typing: false` stays visible until its next message
/// clears the display.
#[derive(Debug, Default)]
pub struct TypingState {
    local_is_typing: bool,
    remote_user: Option<UserId>,
}

impl TypingState {
    /// Registers a local keystroke. Returns `true` if a `typing: true`
    /// signal should be sent, i.e. on the first keystroke of a burst.
    pub fn note_local_keystroke(&mut self) -> bool {
        if self.local_is_typing {
            return false;
        }
        self.local_is_typing = true;
        true
    }

    /// Registers the expiry of the local idle timer. Returns `true` if a
    /// `typing: false` signal should be sent.
    pub fn note_local_idle(&mut self) -> bool {
        if !self.local_is_typing {
            return false;
        }
        self.local_is_typing = false;
        true
    }

    /// Drops the local flag without signaling, for when the connection the
    /// signal would have gone to is gone.
    pub fn reset_local(&mut self) {
        self.local_is_typing = false;
    }

    /// Applies a remote typing signal. Returns `true` if the displayed
    /// typing user changed.
    pub fn apply_remote(&mut self, user: UserId, is_typing: bool) -> bool {
        let next = if is_typing {
            Some(user)
        } else if self.remote_user == Some(user) {
            None
        } else {
            return false;
        };

        if self.remote_user == next {
            return false;
        }
        self.remote_user = next;
        true
    }

    /// Clears the remote typing display. Returns `true` if it was set.
    pub fn clear_remote(&mut self) -> bool {
        self.remote_user.take().is_some()
    }

    pub fn typing_user(&self) -> Option<UserId> {
        self.remote_user
    }
}
