// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use reqwest::{Method, Response};
use secrecy::{ExposeSecret, Secret};
use serde_json::json;
use url::Url;

use crate::domain::{Emoji, GroupId, MessageId};
use crate::util::RequestError;
use crate::wire::WireMessage;

use super::ChatApi;

/// `ChatApi` implementation against the chat server's REST endpoints.
pub struct HttpChatApi {
    base_url: Url,
    token: Option<Secret<String>>,
    client: reqwest::Client,
}

impl HttpChatApi {
    pub fn new(base_url: Url, token: Option<Secret<String>>) -> Self {
        Self {
            base_url,
            token,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(
        &self,
        segments: impl IntoIterator<Item = String>,
    ) -> Result<Url, RequestError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RequestError::Generic {
                msg: format!("'{}' cannot be used as an API base URL", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token.expose_secret());
        }
        builder
    }

    async fn expect_success(response: Response) -> Result<Response, RequestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(RequestError::Rejected {
            msg: format!("{status} {body}").trim().to_string(),
        })
    }
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn load_messages(&self, group_id: GroupId) -> Result<Vec<WireMessage>, RequestError> {
        let url = self.endpoint([
            "groups".to_string(),
            group_id.to_string(),
            "messages".to_string(),
        ])?;
        let response = self.request(Method::GET, url).send().await?;
        let response = Self::expect_success(response).await?;
        Ok(response.json().await?)
    }

    async fn delete_message(
        &self,
        group_id: GroupId,
        message_id: MessageId,
    ) -> Result<(), RequestError> {
        let url = self.endpoint([
            "groups".to_string(),
            group_id.to_string(),
            "messages".to_string(),
            message_id.to_string(),
        ])?;
        let response = self.request(Method::DELETE, url).send().await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    async fn set_pinned(
        &self,
        group_id: GroupId,
        message_id: MessageId,
        is_pinned: bool,
    ) -> Result<(), RequestError> {
        let url = self.endpoint([
            "groups".to_string(),
            group_id.to_string(),
            "messages".to_string(),
            message_id.to_string(),
            "pin".to_string(),
        ])?;
        let response = self
            .request(Method::POST, url)
            .json(&json!({ "is_pinned": is_pinned }))
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    async fn add_reaction(
        &self,
        group_id: GroupId,
        message_id: MessageId,
        emoji: Emoji,
    ) -> Result<(), RequestError> {
        let url = self.endpoint([
            "groups".to_string(),
            group_id.to_string(),
            "messages".to_string(),
            message_id.to_string(),
            "reactions".to_string(),
        ])?;
        let response = self
            .request(Method::POST, url)
            .json(&json!({ "emoji": emoji }))
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }
}
