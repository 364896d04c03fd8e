// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::api::ChatApi;
use crate::client::client::ClientInner;
use crate::client::ConnectorProvider;
use crate::connector::{Connection, ConnectionError, ConnectionEventHandler, Connector};
use crate::deps::{IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};
use crate::domain::{Emoji, GroupId, MessageId};
use crate::util::RequestError;
use crate::wire::WireMessage;
use crate::{Client, ClientDelegate, SessionConfig};

pub struct UndefinedConnector {}
pub struct UndefinedApi {}

pub struct ClientBuilder {
    connector_provider: ConnectorProvider,
    api: Arc<dyn ChatApi>,
    id_provider: Arc<dyn IDProvider>,
    time_provider: Arc<dyn TimeProvider>,
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl ClientBuilder {
    pub(super) fn new() -> Self {
        ClientBuilder {
            connector_provider: Box::new(|| Box::new(UndefinedConnector {})),
            api: Arc::new(UndefinedApi {}),
            id_provider: Arc::new(UUIDProvider::new()),
            time_provider: Arc::new(SystemTimeProvider::default()),
            delegate: None,
        }
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.connector_provider = connector_provider;
        self
    }

    pub fn set_api(mut self, api: Arc<dyn ChatApi>) -> Self {
        self.api = api;
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn build(self, config: SessionConfig) -> Client {
        Client {
            inner: Arc::new(ClientInner {
                config,
                connector_provider: self.connector_provider,
                api: self.api,
                id_provider: self.id_provider,
                time_provider: self.time_provider,
                delegate: self.delegate,
                state: Default::default(),
                connection: Default::default(),
                generation: Default::default(),
                reconnect_timer: Default::default(),
                typing_idle_timer: Default::default(),
            }),
        }
    }
}

#[async_trait]
impl Connector for UndefinedConnector {
    async fn connect(
        &self,
        _url: &Url,
        _event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        panic!("Client doesn't have a connector. Provide one before calling connect()")
    }
}

#[async_trait]
impl ChatApi for UndefinedApi {
    async fn load_messages(&self, _group_id: GroupId) -> Result<Vec<WireMessage>, RequestError> {
        panic!("Client doesn't have an API. Provide one before calling connect()")
    }

    async fn delete_message(
        &self,
        _group_id: GroupId,
        _message_id: MessageId,
    ) -> Result<(), RequestError> {
        panic!("Client doesn't have an API. Provide one before calling connect()")
    }

    async fn set_pinned(
        &self,
        _group_id: GroupId,
        _message_id: MessageId,
        _is_pinned: bool,
    ) -> Result<(), RequestError> {
        panic!("Client doesn't have an API. Provide one before calling connect()")
    }

    async fn add_reaction(
        &self,
        _group_id: GroupId,
        _message_id: MessageId,
        _emoji: Emoji,
    ) -> Result<(), RequestError> {
        panic!("Client doesn't have an API. Provide one before calling connect()")
    }
}
