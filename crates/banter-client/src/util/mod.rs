// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::pin::Pin;

pub use request_error::RequestError;

mod request_error;

pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;
