// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::util::PinnedFuture;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("Timed out")]
    TimedOut,
    #[error("{msg}")]
    Generic { msg: String },
}

pub type ConnectionEventHandler =
    Box<dyn Fn(ConnectionEvent) -> PinnedFuture<()> + Send + Sync>;

#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(
        &self,
        url: &Url,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    /// A text frame arrived on the socket.
    Text(String),
    /// The transport reported a fault. The socket may still close afterwards,
    /// in which case a `Closed` event follows.
    Error { error: ConnectionError },
    /// The socket was closed with the given close code.
    Closed { code: u16, reason: Option<String> },
}

pub trait Connection: Send + Sync {
    fn send_text(&self, text: String) -> Result<()>;
    fn close(&self, code: u16, reason: &str);
}
