// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{format_err, Result};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use url::Url;

use crate::api::ChatApi;
use crate::client::builder::ClientBuilder;
use crate::client::session::SessionState;
use crate::client::ConnectorProvider;
use crate::connector::{Connection, ConnectionEvent};
use crate::deps::{IDProvider, TimeProvider};
use crate::domain::{ConnectionState, Emoji, GroupId, Message, MessageId, MessageLocalId, UserId};
use crate::util::{PinnedFuture, RequestError};
use crate::wire::{ClientCommand, PresenceAction, ServerEvent};
use crate::ClientEvent;

/// Context for a single group-chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// WebSocket endpoint of the chat server.
    pub url: Url,
    /// The local participant.
    pub user_id: UserId,
    /// The group whose timeline this session mirrors.
    pub group_id: GroupId,
}

impl SessionConfig {
    pub fn new(url: Url, user_id: UserId, group_id: GroupId) -> Self {
        SessionConfig {
            url,
            user_id,
            group_id,
        }
    }
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

#[derive(Clone)]
pub struct Client {
    pub(super) inner: Arc<ClientInner>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Loads the message history, dials the socket and starts the session.
    ///
    /// Transport failures do not surface here. A failed dial parks the
    /// session in `ReconnectWait` and retries, exactly like a dropped
    /// connection would; observe `ConnectionStateChanged` events instead.
    /// Errs only on misuse, i.e. connecting a running or closed session.
    pub async fn connect(&self) -> Result<()> {
        self.inner.clone().connect().await
    }

    /// Closes the session for good. Cancels all timers, closes the socket
    /// and transitions to the terminal `Closed` state.
    pub fn close(&self) {
        self.inner.close()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.inner.state.lock().connection_state
    }

    pub fn messages(&self) -> Vec<Message> {
        let state = self.inner.state.lock();
        state.messages.snapshot(&state.pins)
    }

    pub fn online_users(&self) -> Vec<UserId> {
        self.inner.state.lock().presence.online_users()
    }

    pub fn typing_user(&self) -> Option<UserId> {
        self.inner.state.lock().typing.typing_user()
    }

    pub fn pinned_messages(&self) -> Vec<MessageId> {
        self.inner.state.lock().pins.pinned_ids()
    }

    /// Appends the message optimistically and sends it over the socket. The
    /// pending entry is reconciled into its confirmed form when the server
    /// echoes the message back with our correlation token.
    pub fn send_message(
        &self,
        content: Option<String>,
        file_url: Option<Url>,
    ) -> Result<(), RequestError> {
        self.inner.send_message(content, file_url)
    }

    /// Signals that the local participant is typing. Call this on every
    /// keystroke; the client debounces the outgoing frames. Dropped silently
    /// when the session is not open.
    pub fn set_typing(&self) {
        self.inner.note_typing()
    }

    /// Deletes a message. The local store only changes once the server
    /// pushes the corresponding `message_deleted` event back.
    pub async fn delete_message(&self, id: MessageId) -> Result<(), RequestError> {
        self.inner.clone().delete_message(id).await
    }

    /// Flips the pin on a message optimistically and reports the new value
    /// to the server. A later server confirmation overrides the guess.
    pub async fn toggle_pin(&self, id: MessageId) -> Result<(), RequestError> {
        self.inner.clone().toggle_pin(id).await
    }

    /// Applies a reaction optimistically and reports it to the server. A
    /// failed round-trip leaves the reaction in place; retrying is harmless.
    pub async fn react(&self, id: MessageId, emoji: Emoji) -> Result<(), RequestError> {
        self.inner.clone().react(id, emoji).await
    }
}

const RECONNECT_DELAY: Duration = Duration::from_secs(2);
const TYPING_IDLE_TIMEOUT: Duration = Duration::from_secs(2);

const CLOSE_CODE_NORMAL: u16 = 1000;
/// Close codes after which the session stays down instead of reconnecting
/// (RFC 6455 normal closure and going-away).
const NORMAL_CLOSURE_CODES: [u16; 2] = [1000, 1001];

pub(super) struct ClientInner {
    pub config: SessionConfig,
    pub connector_provider: ConnectorProvider,
    pub api: Arc<dyn ChatApi>,
    pub id_provider: Arc<dyn IDProvider>,
    pub time_provider: Arc<dyn TimeProvider>,
    pub delegate: Option<Box<dyn ClientDelegate>>,
    pub state: Mutex<SessionState>,
    pub connection: Mutex<Option<Box<dyn Connection>>>,
    /// Bumped on every dial and on `close()`. Events raised by a socket from
    /// an older generation are dropped.
    pub generation: AtomicU64,
    pub reconnect_timer: Mutex<Option<JoinHandle<()>>>,
    pub typing_idle_timer: Mutex<Option<JoinHandle<()>>>,
}

impl ClientInner {
    async fn connect(self: Arc<Self>) -> Result<()> {
        let event = {
            let mut state = self.state.lock();
            match state.connection_state {
                ConnectionState::Idle => (),
                ConnectionState::Closed => {
                    return Err(format_err!(
                        "Session was closed. Build a new client to connect again."
                    ));
                }
                ConnectionState::Connecting
                | ConnectionState::Open
                | ConnectionState::ReconnectWait => {
                    return Err(format_err!("Session is already running."));
                }
            }
            state.set_connection_state(ConnectionState::Connecting)
        };
        self.dispatch(event);

        let seed = match self.api.load_messages(self.config.group_id).await {
            Ok(messages) => Some(messages),
            Err(error) => {
                warn!("Failed to load message history: {}", error);
                None
            }
        };

        let event = {
            let mut state = self.state.lock();
            if state.connection_state != ConnectionState::Connecting {
                // close() won the race against the history fetch.
                return Ok(());
            }
            seed.and_then(|messages| state.seed_history(messages))
        };
        self.dispatch(event);

        self.dial().await;
        Ok(())
    }

    fn close(self: &Arc<Self>) {
        // Invalidate handlers of the current socket before touching anything
        // else, so that its closing handshake cannot re-enter the session.
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.cancel_timers();

        let connection = self.connection.lock().take();
        if let Some(connection) = connection {
            connection.close(CLOSE_CODE_NORMAL, "Session closed");
        }

        let events = {
            self.state
                .lock()
                .handle_connection_drop(ConnectionState::Closed)
        };
        self.dispatch(events);
    }

    /// Performs a single connection attempt from the `Connecting` state.
    async fn dial(self: Arc<Self>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let handler_inner = self.clone();
        let result = (self.connector_provider)()
            .connect(
                &self.config.url,
                Box::new(move |event| {
                    let inner = handler_inner.clone();
                    Box::pin(async move { inner.handle_connection_event(generation, event) })
                        as PinnedFuture<_>
                }),
            )
            .await;

        match result {
            Ok(connection) => {
                let event = {
                    let mut state = self.state.lock();
                    if state.connection_state != ConnectionState::Connecting {
                        // close() won the race against the dial.
                        connection.close(CLOSE_CODE_NORMAL, "Session closed");
                        return;
                    }
                    self.connection.lock().replace(connection);
                    state.set_connection_state(ConnectionState::Open)
                };
                self.send_command(&ClientCommand::Presence {
                    action: PresenceAction::Join,
                    user_id: self.config.user_id,
                })
                .unwrap_or_else(|err| warn!("Failed to announce presence: {}", err));
                self.dispatch(event);
            }
            Err(error) => {
                warn!("Connection to {} failed: {}", self.config.url, error);
                let events = {
                    let mut state = self.state.lock();
                    if state.connection_state != ConnectionState::Connecting {
                        // close() won the race against the dial.
                        return;
                    }
                    state.handle_connection_drop(ConnectionState::ReconnectWait)
                };
                self.dispatch(events);
                self.schedule_reconnect();
            }
        }
    }

    fn handle_connection_event(self: &Arc<Self>, generation: u64, event: ConnectionEvent) {
        if self.generation.load(Ordering::SeqCst) != generation {
            // A socket from before the last close() or redial speaking up.
            return;
        }
        match event {
            ConnectionEvent::Text(text) => self.handle_text_frame(&text),
            ConnectionEvent::Error { error } => {
                warn!("Transport error: {}", error);
            }
            ConnectionEvent::Closed { code, reason } => {
                info!("Connection closed (code {}, reason {:?})", code, reason);
                self.handle_closed(code);
            }
        }
    }

    fn handle_text_frame(self: &Arc<Self>, text: &str) {
        let event = match serde_json::from_str::<ServerEvent>(text) {
            Ok(event) => event,
            Err(err) => {
                error!("Failed to parse server event. {}", err);
                return;
            }
        };

        let events = {
            self.state
                .lock()
                .apply_server_event(self.config.user_id, event)
        };
        self.dispatch(events);
    }

    fn handle_closed(self: &Arc<Self>, code: u16) {
        let next = if NORMAL_CLOSURE_CODES.contains(&code) {
            ConnectionState::Closed
        } else {
            ConnectionState::ReconnectWait
        };

        self.connection.lock().take();
        self.cancel_typing_idle_timer();

        let events = { self.state.lock().handle_connection_drop(next) };
        self.dispatch(events);

        match next {
            ConnectionState::ReconnectWait => self.schedule_reconnect(),
            _ => self.cancel_timers(),
        }
    }

    fn schedule_reconnect(self: &Arc<Self>) {
        let inner = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(RECONNECT_DELAY).await;
            inner.reconnect().await;
        });
        if let Some(previous) = self.reconnect_timer.lock().replace(handle) {
            previous.abort();
        }
    }

    async fn reconnect(self: Arc<Self>) {
        let event = {
            let mut state = self.state.lock();
            if state.connection_state != ConnectionState::ReconnectWait {
                // close() raced the timer.
                return;
            }
            state.set_connection_state(ConnectionState::Connecting)
        };
        self.dispatch(event);
        self.dial().await;
    }

    fn send_message(
        self: &Arc<Self>,
        content: Option<String>,
        file_url: Option<Url>,
    ) -> Result<(), RequestError> {
        let is_empty = content.as_deref().map_or(true, |c| c.trim().is_empty());
        if is_empty && file_url.is_none() {
            return Err(RequestError::Generic {
                msg: "Cannot send an empty message".to_string(),
            });
        }

        let (event, local_id) = {
            let mut state = self.state.lock();
            if state.connection_state != ConnectionState::Open {
                return Err(RequestError::NotConnected);
            }
            let local_id = MessageLocalId::from(self.id_provider.new_id());
            state.messages.append_optimistic(
                local_id.clone(),
                self.config.user_id,
                content.clone(),
                file_url.clone(),
                self.time_provider.now(),
            );
            (state.messages_changed(), local_id)
        };
        self.dispatch([event]);

        self.send_command(&ClientCommand::ChatMessage {
            content,
            file_url,
            group_id: self.config.group_id,
            client_id: local_id,
        })
    }

    fn note_typing(self: &Arc<Self>) {
        let should_send = {
            let mut state = self.state.lock();
            if state.connection_state != ConnectionState::Open {
                return;
            }
            state.typing.note_local_keystroke()
        };

        if should_send {
            if let Err(err) = self.send_command(&ClientCommand::Typing { is_typing: true }) {
                warn!("Failed to send typing notification: {}", err);
            }
        }

        // Every keystroke pushes the idle deadline out again.
        self.schedule_typing_idle();
    }

    fn schedule_typing_idle(self: &Arc<Self>) {
        let inner = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(TYPING_IDLE_TIMEOUT).await;
            inner.typing_idle_elapsed();
        });
        if let Some(previous) = self.typing_idle_timer.lock().replace(handle) {
            previous.abort();
        }
    }

    fn typing_idle_elapsed(self: &Arc<Self>) {
        let should_send = {
            let mut state = self.state.lock();
            state.connection_state == ConnectionState::Open && state.typing.note_local_idle()
        };
        if should_send {
            if let Err(err) = self.send_command(&ClientCommand::Typing { is_typing: false }) {
                warn!("Failed to send typing notification: {}", err);
            }
        }
    }

    async fn delete_message(self: Arc<Self>, id: MessageId) -> Result<(), RequestError> {
        {
            let state = self.state.lock();
            if state.connection_state != ConnectionState::Open {
                return Err(RequestError::NotConnected);
            }
            if !state.messages.contains(&id) {
                return Err(RequestError::UnknownMessage { id });
            }
        }
        // The store changes once the server pushes `message_deleted` back.
        self.api.delete_message(self.config.group_id, id).await
    }

    async fn toggle_pin(self: Arc<Self>, id: MessageId) -> Result<(), RequestError> {
        let (event, is_pinned) = {
            let mut state = self.state.lock();
            if state.connection_state != ConnectionState::Open {
                return Err(RequestError::NotConnected);
            }
            if !state.messages.contains(&id) {
                return Err(RequestError::UnknownMessage { id });
            }
            let is_pinned = state.pins.toggle(id);
            (state.pinned_changed(), is_pinned)
        };
        self.dispatch([event]);

        self.api
            .set_pinned(self.config.group_id, id, is_pinned)
            .await
    }

    async fn react(self: Arc<Self>, id: MessageId, emoji: Emoji) -> Result<(), RequestError> {
        let event = {
            let mut state = self.state.lock();
            if state.connection_state != ConnectionState::Open {
                return Err(RequestError::NotConnected);
            }
            if !state.messages.react(&id, emoji.clone()) {
                return Err(RequestError::UnknownMessage { id });
            }
            state.messages_changed()
        };
        self.dispatch([event]);

        self.api.add_reaction(self.config.group_id, id, emoji).await
    }

    fn send_command(&self, command: &ClientCommand) -> Result<(), RequestError> {
        let connection = self.connection.lock();
        let Some(connection) = connection.as_ref() else {
            return Err(RequestError::NotConnected);
        };
        let payload = serde_json::to_string(command).map_err(|err| RequestError::Generic {
            msg: err.to_string(),
        })?;
        connection
            .send_text(payload)
            .map_err(|err| RequestError::Generic {
                msg: err.to_string(),
            })
    }

    fn cancel_timers(&self) {
        if let Some(timer) = self.reconnect_timer.lock().take() {
            timer.abort();
        }
        self.cancel_typing_idle_timer();
    }

    fn cancel_typing_idle_timer(&self) {
        if let Some(timer) = self.typing_idle_timer.lock().take() {
            timer.abort();
        }
    }

    /// Dispatches events to the delegate. Must never be called while a lock
    /// is held; delegates are free to call back into the client.
    fn dispatch(self: &Arc<Self>, events: impl IntoIterator<Item = ClientEvent>) {
        let Some(delegate) = &self.delegate else {
            return;
        };
        let client = Client {
            inner: self.clone(),
        };
        for event in events {
            delegate.handle_event(client.clone(), event);
        }
    }
}
