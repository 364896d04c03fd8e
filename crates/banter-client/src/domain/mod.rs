// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_state::ConnectionState;
pub use ids::{Emoji, GroupId, MessageId, MessageKey, MessageLocalId, UserId};
pub use message::Message;
pub use pins::PinnedRegistry;
pub use presence::PresenceSet;
pub use store::MessageStore;
pub use typing::TypingState;

mod connection_state;
mod ids;
mod message;
mod pins;
mod presence;
mod store;
mod typing;
