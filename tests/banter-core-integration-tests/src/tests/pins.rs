// banter-core-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use banter_client::api::mocks::MockChatApi;
use banter_client::domain::{GroupId, MessageId};
use banter_client::test::{ClientTestAdditions, ConnectedClient};
use banter_client::{Client, ClientEvent, RequestError};

fn api_with_empty_history() -> MockChatApi {
    let mut api = MockChatApi::new();
    api.expect_load_messages()
        .returning(|_| Box::pin(async { Ok(vec![]) }));
    api
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_toggles_pin_optimistically() -> Result<()> {
    let mut api = api_with_empty_history();
    api.expect_set_pinned()
        .once()
        .with(
            predicate::eq(GroupId::from(1)),
            predicate::eq(MessageId::from(42)),
            predicate::eq(true),
        )
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));

    let connected = Client::connected_client_with_api(api).await?;

    connected
        .connection
        .receive_text(
            r#"{"type":"new_message","message":{"id":42,"sender":9,"content":"Hi","created_at":"2024-04-01T10:00:01Z"}}"#,
        )
        .await;
    connected.take_events();

    connected.client.toggle_pin(MessageId::from(42)).await?;

    assert_eq!(
        connected.client.pinned_messages(),
        vec![MessageId::from(42)]
    );
    assert!(connected.client.messages()[0].is_pinned);
    assert_eq!(
        connected.take_events(),
        vec![ClientEvent::PinnedChanged {
            pinned: vec![MessageId::from(42)]
        }]
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_server_confirmation_overrides_optimistic_pin() -> Result<()> {
    let mut api = api_with_empty_history();
    api.expect_set_pinned()
        .once()
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));

    let connected = Client::connected_client_with_api(api).await?;

    connected
        .connection
        .receive_text(
            r#"{"type":"new_message","message":{"id":42,"sender":9,"content":"Hi","created_at":"2024-04-01T10:00:01Z"}}"#,
        )
        .await;

    connected.client.toggle_pin(MessageId::from(42)).await?;
    assert_eq!(
        connected.client.pinned_messages(),
        vec![MessageId::from(42)]
    );

    // The server decided otherwise.
    connected
        .connection
        .receive_text(r#"{"type":"message_unpinned","message_id":42}"#)
        .await;

    assert_eq!(connected.client.pinned_messages(), vec![]);
    assert!(!connected.client.messages()[0].is_pinned);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_pin_round_trip() -> Result<()> {
    let mut api = api_with_empty_history();
    api.expect_set_pinned()
        .once()
        .with(
            predicate::always(),
            predicate::always(),
            predicate::eq(true),
        )
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));
    api.expect_set_pinned()
        .once()
        .with(
            predicate::always(),
            predicate::always(),
            predicate::eq(false),
        )
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));

    let connected = Client::connected_client_with_api(api).await?;

    connected
        .connection
        .receive_text(
            r#"{"type":"new_message","message":{"id":42,"sender":9,"content":"Hi","created_at":"2024-04-01T10:00:01Z"}}"#,
        )
        .await;

    connected.client.toggle_pin(MessageId::from(42)).await?;
    connected.take_events();

    // The confirmation matches what we already guessed; nothing to report.
    connected
        .connection
        .receive_text(
            r#"{"type":"message_pinned","message":{"id":42,"sender":9,"content":"Hi","created_at":"2024-04-01T10:00:01Z"}}"#,
        )
        .await;
    assert_eq!(connected.take_events(), vec![]);

    connected.client.toggle_pin(MessageId::from(42)).await?;
    assert_eq!(connected.client.pinned_messages(), vec![]);
    assert_eq!(
        connected.take_events(),
        vec![ClientEvent::PinnedChanged { pinned: vec![] }]
    );

    // Same again for the unpin confirmation.
    connected
        .connection
        .receive_text(r#"{"type":"message_unpinned","message_id":42}"#)
        .await;
    assert_eq!(connected.take_events(), vec![]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_pin_of_unknown_message_errs() -> Result<()> {
    let ConnectedClient { client, .. } = Client::connected_client().await?;

    let result = client.toggle_pin(MessageId::from(99)).await;

    assert!(matches!(result, Err(RequestError::UnknownMessage { .. })));
    assert_eq!(client.pinned_messages(), vec![]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_pin_requires_open_connection() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    connection.receive_closed(1000).await;

    let result = client.toggle_pin(MessageId::from(42)).await;
    assert!(matches!(result, Err(RequestError::NotConnected)));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_server_pin_of_unknown_message_inserts_it() -> Result<()> {
    let connected = Client::connected_client().await?;

    connected
        .connection
        .receive_text(
            r#"{"type":"message_pinned","message":{"id":42,"sender":9,"content":"Worth keeping","created_at":"2024-04-01T10:00:01Z"}}"#,
        )
        .await;

    let messages = connected.client.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].is_pinned);
    assert_eq!(
        connected.client.pinned_messages(),
        vec![MessageId::from(42)]
    );

    let events = connected.take_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], ClientEvent::MessagesChanged { .. }));
    assert!(matches!(events[1], ClientEvent::PinnedChanged { .. }));
    Ok(())
}
