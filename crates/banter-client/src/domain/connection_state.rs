// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::Display;

/// Lifecycle of the session's transport connection. `Closed` is terminal and
/// only reached through an explicit close, either by the user or by the
/// server sending a normal-closure code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ConnectionState {
    #[default]
    Idle,
    Connecting,
    Open,
    ReconnectWait,
    Closed,
}
