// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use banter_utils::{id_string, id_u64};

id_u64!(UserId);

id_u64!(GroupId);

// The ID assigned by the server to the message.
id_u64!(MessageId);

// The ID assigned by the sending client to a message so that it can correlate
// the optimistic local copy with the server-confirmed one. It is not
// guaranteed to be unique across clients.
id_string!(MessageLocalId);

id_string!(Emoji);

/// Either of the two identifiers a stored message can be looked up by.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub enum MessageKey {
    Server(MessageId),
    Local(MessageLocalId),
}
