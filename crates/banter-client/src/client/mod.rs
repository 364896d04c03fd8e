// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use builder::ClientBuilder;
pub use client::{Client, ClientDelegate, SessionConfig};

mod builder;
mod client;
mod session;

use crate::connector::Connector;

pub type ConnectorProvider = Box<dyn Fn() -> Box<dyn Connector> + Send + Sync>;
