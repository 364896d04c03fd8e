// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use futures::stream::StreamExt;
use futures::SinkExt;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::error;
use url::Url;

use crate::client::ConnectorProvider;
use crate::connector::{
    Connection as ConnectionTrait, ConnectionError, ConnectionEvent, ConnectionEventHandler,
    Connector as ConnectorTrait,
};

// Reserved codes the peer cannot send in a close frame (RFC 6455 §7.4.1).
const CLOSE_CODE_NO_STATUS: u16 = 1005;
const CLOSE_CODE_ABNORMAL: u16 = 1006;

pub struct Connector {}

impl Connector {
    pub fn provider() -> ConnectorProvider {
        Box::new(|| Box::new(Connector {}))
    }
}

#[async_trait]
impl ConnectorTrait for Connector {
    async fn connect(
        &self,
        url: &Url,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn ConnectionTrait>, ConnectionError> {
        let (stream, _response) =
            connect_async(url.as_str())
                .await
                .map_err(|err| ConnectionError::Generic {
                    msg: err.to_string(),
                })?;

        Ok(Box::new(Connection::new(stream, event_handler)) as Box<dyn ConnectionTrait>)
    }
}

pub struct Connection {
    sender: UnboundedSender<Message>,
    _read_handle: Option<JoinHandle<()>>,
    _write_handle: Option<JoinHandle<()>>,
}

impl Connection {
    fn new(
        stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
        event_handler: ConnectionEventHandler,
    ) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (mut writer, mut reader) = stream.split();

        let read_handle = task::spawn(async move {
            let mut close_sent = false;

            while let Some(event) = reader.next().await {
                match event {
                    Ok(Message::Text(text)) => {
                        // The session relies on frames arriving in socket order,
                        // so the handler future is awaited inline instead of
                        // being spawned.
                        (event_handler)(ConnectionEvent::Text(text.to_string())).await;
                    }
                    Ok(Message::Close(frame)) => {
                        let (code, reason) = match frame {
                            Some(frame) => (
                                u16::from(frame.code),
                                (!frame.reason.is_empty()).then(|| frame.reason.to_string()),
                            ),
                            None => (CLOSE_CODE_NO_STATUS, None),
                        };
                        (event_handler)(ConnectionEvent::Closed { code, reason }).await;
                        close_sent = true;
                        break;
                    }
                    Ok(_) => (),
                    Err(err) => {
                        (event_handler)(ConnectionEvent::Error {
                            error: ConnectionError::Generic {
                                msg: err.to_string(),
                            },
                        })
                        .await;
                        (event_handler)(ConnectionEvent::Closed {
                            code: CLOSE_CODE_ABNORMAL,
                            reason: None,
                        })
                        .await;
                        close_sent = true;
                        break;
                    }
                }
            }

            if !close_sent {
                // The stream ended without a close frame, e.g. the peer
                // dropped the TCP connection.
                (event_handler)(ConnectionEvent::Closed {
                    code: CLOSE_CODE_ABNORMAL,
                    reason: None,
                })
                .await;
            }
        });

        let write_handle = task::spawn(async move {
            while let Some(message) = rx.recv().await {
                let is_close = matches!(message, Message::Close(_));
                if let Err(err) = writer.send(message).await {
                    error!("cannot send frame to socket: {}", err);
                    break;
                }
                if is_close {
                    break;
                }
            }
        });

        Connection {
            sender: tx,
            _read_handle: Some(read_handle),
            _write_handle: Some(write_handle),
        }
    }
}

impl ConnectionTrait for Connection {
    fn send_text(&self, text: String) -> Result<()> {
        self.sender.send(Message::Text(text.into()))?;
        Ok(())
    }

    fn close(&self, code: u16, reason: &str) {
        let frame = CloseFrame {
            code: CloseCode::from(code),
            reason: reason.to_string().into(),
        };
        // The writer task being gone means the socket is already closed.
        let _ = self.sender.send(Message::Close(Some(frame)));
    }
}
