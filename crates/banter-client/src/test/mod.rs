// banter-core-client/banter-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connected_client::{ClientTestAdditions, ConnectedClient};
pub use connector::{Connection, Connector};
pub use constant_time_provider::ConstantTimeProvider;
pub use delegate::RecordingDelegate;
pub use incrementing_id_provider::IncrementingIDProvider;


#[macro_export]
macro_rules! url {
    ($url:expr) => {
        $url.parse::<url::Url>().unwrap()
    };
}
