// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::MessageId;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Request Timeout")]
    TimedOut,
    #[error("Request Error: Client is not connected")]
    NotConnected,
    #[error("Request Error: Unexpected server response")]
    UnexpectedResponse,
    #[error("Server Error: {msg}")]
    Rejected { msg: String },
    #[error("Request Error: Unknown message {id}")]
    UnknownMessage { id: MessageId },
    #[error("Request error: {msg}")]
    Generic { msg: String },
}

impl RequestError {
    pub fn is_not_connected_err(&self) -> bool {
        matches!(self, RequestError::NotConnected)
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return RequestError::TimedOut;
        }
        if err.is_decode() {
            return RequestError::UnexpectedResponse;
        }
        RequestError::Generic {
            msg: err.to_string(),
        }
    }
}
