// banter-core-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use banter_client::domain::UserId;
use banter_client::test::ClientTestAdditions;
use banter_client::{Client, ClientEvent};

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_applies_snapshot_and_deltas() -> Result<()> {
    let connected = Client::connected_client().await?;

    connected
        .connection
        .receive_text(r#"{"type":"presence","online_users":[7]}"#)
        .await;
    connected
        .connection
        .receive_text(r#"{"type":"user_joined","user_id":9}"#)
        .await;

    assert_eq!(
        connected.client.online_users(),
        vec![UserId::from(7), UserId::from(9)]
    );

    connected
        .connection
        .receive_text(r#"{"type":"user_left","user_id":7}"#)
        .await;

    assert_eq!(connected.client.online_users(), vec![UserId::from(9)]);
    assert_eq!(
        connected.take_events(),
        vec![
            ClientEvent::PresenceChanged {
                online_users: vec![UserId::from(7)]
            },
            ClientEvent::PresenceChanged {
                online_users: vec![UserId::from(7), UserId::from(9)]
            },
            ClientEvent::PresenceChanged {
                online_users: vec![UserId::from(9)]
            },
        ]
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_skips_events_for_unchanged_presence() -> Result<()> {
    let connected = Client::connected_client().await?;

    connected
        .connection
        .receive_text(r#"{"type":"presence","online_users":[7,9]}"#)
        .await;
    connected.take_events();

    // A reordered snapshot, a known joiner and an unknown leaver.
    connected
        .connection
        .receive_text(r#"{"type":"presence","online_users":[9,7]}"#)
        .await;
    connected
        .connection
        .receive_text(r#"{"type":"user_joined","user_id":9}"#)
        .await;
    connected
        .connection
        .receive_text(r#"{"type":"user_left","user_id":3}"#)
        .await;

    assert_eq!(connected.take_events(), vec![]);
    assert_eq!(
        connected.client.online_users(),
        vec![UserId::from(7), UserId::from(9)]
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_presence_clears_on_fresh_snapshot() -> Result<()> {
    let connected = Client::connected_client().await?;

    connected
        .connection
        .receive_text(r#"{"type":"presence","online_users":[3,7,9]}"#)
        .await;
    connected
        .connection
        .receive_text(r#"{"type":"presence","online_users":[9]}"#)
        .await;

    // A snapshot replaces the set; users missing from it are gone.
    assert_eq!(connected.client.online_users(), vec![UserId::from(9)]);
    Ok(())
}
