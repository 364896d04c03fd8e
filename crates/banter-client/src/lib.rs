// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientBuilder, ClientDelegate, SessionConfig};
pub use client_event::ClientEvent;
pub use connector::{Connection, ConnectionError, Connector};
pub use deps::{IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};
pub use util::{PinnedFuture, RequestError};

pub mod api;
pub mod client;
mod client_event;
pub mod connector;
mod deps;
pub mod domain;
mod util;
pub mod wire;

#[cfg(feature = "test")]
pub mod test;
