// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::{Emoji, GroupId, MessageId};
use crate::util::RequestError;
use crate::wire::WireMessage;

/// REST counterpart to the socket. History, deletions, pins and reactions
/// go through here instead of over the connection.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ChatApi: Send + Sync {
    /// Loads the persisted history of a group, oldest message first.
    async fn load_messages(&self, group_id: GroupId) -> Result<Vec<WireMessage>, RequestError>;

    async fn delete_message(
        &self,
        group_id: GroupId,
        message_id: MessageId,
    ) -> Result<(), RequestError>;

    async fn set_pinned(
        &self,
        group_id: GroupId,
        message_id: MessageId,
        is_pinned: bool,
    ) -> Result<(), RequestError>;

    async fn add_reaction(
        &self,
        group_id: GroupId,
        message_id: MessageId,
        emoji: Emoji,
    ) -> Result<(), RequestError>;
}
