// banter-core-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use pretty_assertions::assert_eq;

use banter_client::domain::{ConnectionState, UserId};
use banter_client::test::{ClientTestAdditions, ConnectedClient};
use banter_client::{Client, ClientEvent};

#[tokio::test(start_paused = true)]
async fn test_signals_typing_once_per_burst() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    client.set_typing();
    client.set_typing();
    client.set_typing();

    tokio::time::sleep(Duration::from_millis(2100)).await;

    assert_eq!(
        connection.sent_frames(),
        vec![
            r#"{"type":"typing","is_typing":true}"#.to_string(),
            r#"{"type":"typing","is_typing":false}"#.to_string(),
        ]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_keystroke_extends_idle_timer() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    client.set_typing();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    client.set_typing();
    tokio::time::sleep(Duration::from_millis(1500)).await;

    // 3s after the first keystroke, but only 1.5s after the last one.
    assert_eq!(
        connection.sent_frames(),
        vec![r#"{"type":"typing","is_typing":true}"#.to_string()]
    );

    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(
        connection.sent_frames(),
        vec![
            r#"{"type":"typing","is_typing":true}"#.to_string(),
            r#"{"type":"typing","is_typing":false}"#.to_string(),
        ]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_close_cancels_idle_timer() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    client.set_typing();
    client.close();

    tokio::time::sleep(Duration::from_secs(5)).await;

    // No `typing: false` went out after the socket was gone.
    assert_eq!(
        connection.sent_frames(),
        vec![r#"{"type":"typing","is_typing":true}"#.to_string()]
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_typing_is_dropped_while_disconnected() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    connection.receive_closed(1006).await;
    client.set_typing();

    assert_eq!(connection.sent_frames(), Vec::<String>::new());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_typing_state_resets_after_reconnect() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    client.set_typing();
    connection.receive_closed(1006).await;

    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(client.connection_state(), ConnectionState::Open);

    // A fresh burst on the new connection signals again.
    client.set_typing();

    assert_eq!(
        connection.sent_frames(),
        vec![
            r#"{"type":"typing","is_typing":true}"#.to_string(),
            r#"{"type":"presence","action":"join","user_id":1}"#.to_string(),
            r#"{"type":"typing","is_typing":true}"#.to_string(),
        ]
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_displays_remote_typing() -> Result<()> {
    let connected = Client::connected_client().await?;

    connected
        .connection
        .receive_text(r#"{"type":"typing","user_id":9,"is_typing":true}"#)
        .await;
    assert_eq!(connected.client.typing_user(), Some(UserId::from(9)));

    connected
        .connection
        .receive_text(r#"{"type":"typing","user_id":9,"is_typing":false}"#)
        .await;
    assert_eq!(connected.client.typing_user(), None);

    assert_eq!(
        connected.take_events(),
        vec![
            ClientEvent::TypingChanged {
                typing_user: Some(UserId::from(9))
            },
            ClientEvent::TypingChanged { typing_user: None },
        ]
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_ignores_own_typing_echo() -> Result<()> {
    let connected = Client::connected_client().await?;

    connected
        .connection
        .receive_text(r#"{"type":"typing","user_id":1,"is_typing":true}"#)
        .await;

    assert_eq!(connected.client.typing_user(), None);
    assert_eq!(connected.take_events(), vec![]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_message_clears_typing_indicator() -> Result<()> {
    let connected = Client::connected_client().await?;

    connected
        .connection
        .receive_text(r#"{"type":"typing","user_id":9,"is_typing":true}"#)
        .await;
    connected.take_events();

    connected
        .connection
        .receive_text(
            r#"{"type":"new_message","message":{"id":42,"sender":9,"content":"Done!","created_at":"2024-04-01T10:00:05Z"}}"#,
        )
        .await;

    assert_eq!(connected.client.typing_user(), None);

    let events = connected.take_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], ClientEvent::MessagesChanged { .. }));
    assert_eq!(
        events[1],
        ClientEvent::TypingChanged { typing_user: None }
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_remote_typing_clears_when_connection_drops() -> Result<()> {
    let connected = Client::connected_client().await?;

    connected
        .connection
        .receive_text(r#"{"type":"typing","user_id":9,"is_typing":true}"#)
        .await;
    connected.take_events();

    connected.connection.receive_closed(1006).await;

    assert_eq!(connected.client.typing_user(), None);
    // The indicator goes away before the state change is announced.
    assert_eq!(
        connected.take_events(),
        vec![
            ClientEvent::TypingChanged { typing_user: None },
            ClientEvent::ConnectionStateChanged {
                state: ConnectionState::ReconnectWait
            },
        ]
    );
    Ok(())
}
