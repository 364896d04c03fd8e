// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_api::ChatApi;
pub use http::HttpChatApi;

mod chat_api;
mod http;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::chat_api::MockChatApi;
}
