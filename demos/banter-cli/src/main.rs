// banter-core-client
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;
use std::{env, fmt};

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use secrecy::Secret;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::Level;
use url::Url;

use banter_client::api::HttpChatApi;
use banter_client::connector::tungstenite::Connector;
use banter_client::domain::{Emoji, GroupId, Message, MessageId, UserId};
use banter_client::{Client, ClientDelegate, ClientEvent, SessionConfig};

async fn configure_client() -> Result<Client> {
    let socket_url = env_url("BANTER_SOCKET_URL", "ws://localhost:4000/socket")?;
    let api_url = env_url("BANTER_API_URL", "http://localhost:4000/api")?;
    let user_id = UserId::from(env_u64("BANTER_USER_ID", 1)?);
    let group_id = GroupId::from(env_u64("BANTER_GROUP_ID", 1)?);
    let token = env::var("BANTER_TOKEN").ok().map(Secret::new);

    let client = Client::builder()
        .set_connector_provider(Connector::provider())
        .set_api(Arc::new(HttpChatApi::new(api_url, token)))
        .set_delegate(Some(Box::new(Delegate {})))
        .build(SessionConfig::new(socket_url.clone(), user_id, group_id));

    println!("Connecting to {} as user {}…", socket_url, user_id);
    client.connect().await?;

    Ok(client)
}

fn env_url(key: &str, default: &str) -> Result<Url> {
    let value = env::var(key).unwrap_or_else(|_| default.to_string());
    Url::parse(&value).with_context(|| format!("Invalid URL in {key}: {value}"))
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    let Ok(value) = env::var(key) else {
        return Ok(default);
    };
    u64::from_str(&value).with_context(|| format!("Invalid number in {key}: {value}"))
}

fn select_command() -> Selection {
    let options: Vec<Selection> = Selection::iter().collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What do you want to do?")
        .default(0)
        .items(&options[..])
        .interact()
        .ok();

    let Some(selection) = selection else {
        return Selection::Noop;
    };

    println!();
    options[selection].clone()
}

fn prompt_string(prompt: &str) -> String {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .unwrap()
}

fn prompt_message_id() -> MessageId {
    let id = Input::<u64>::with_theme(&ColorfulTheme::default())
        .with_prompt("Message id")
        .interact_text()
        .unwrap();
    MessageId::from(id)
}

struct MessageRow(Message);

impl Display for MessageRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let message = &self.0;
        match &message.id {
            Some(id) => write!(f, "[{}]", id)?,
            None => write!(f, "[pending]")?,
        }
        write!(
            f,
            " {} user {}",
            message.timestamp.format("%Y-%m-%d %H:%M"),
            message.from
        )?;
        if let Some(content) = &message.content {
            write!(f, ": {}", content)?;
        }
        if let Some(file_url) = &message.file_url {
            write!(f, " <{}>", file_url)?;
        }
        if message.is_pinned {
            write!(f, " (pinned)")?;
        }
        if !message.reactions.is_empty() {
            let reactions = message
                .reactions
                .iter()
                .map(|emoji| emoji.as_ref())
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, " {}", reactions)?;
        }
        Ok(())
    }
}

struct Delegate {}

impl ClientDelegate for Delegate {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        match event {
            ClientEvent::ConnectionStateChanged { state } => {
                println!("• connection is now {}", state)
            }
            ClientEvent::MessagesChanged { messages } => {
                if let Some(last) = messages.last() {
                    println!("» {}", MessageRow(last.clone()));
                }
            }
            ClientEvent::PresenceChanged { online_users } => {
                println!("• online: [{}]", ids(&online_users))
            }
            ClientEvent::TypingChanged { typing_user } => match typing_user {
                Some(user) => println!("• user {} is typing…", user),
                None => println!("• nobody is typing"),
            },
            ClientEvent::PinnedChanged { pinned } => {
                println!("• pinned: [{}]", ids(&pinned))
            }
        }
    }
}

fn ids(values: &[impl ToString]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Display, EnumIter)]
enum Selection {
    #[strum(serialize = "Send message")]
    SendMessage,
    #[strum(serialize = "Send file")]
    SendFile,
    #[strum(serialize = "Signal typing")]
    SignalTyping,
    #[strum(serialize = "List messages")]
    ListMessages,
    #[strum(serialize = "List online users")]
    ListOnlineUsers,
    #[strum(serialize = "List pinned messages")]
    ListPinnedMessages,
    #[strum(serialize = "Delete message")]
    DeleteMessage,
    #[strum(serialize = "Toggle pin")]
    TogglePin,
    React,
    Disconnect,
    Noop,
    Exit,
}

#[tokio::main]
async fn main() -> Result<()> {
    env::set_var("RUST_BACKTRACE", "1");
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let client = configure_client().await?;

    loop {
        println!();

        match select_command() {
            Selection::SendMessage => {
                let content = prompt_string("Message");
                if let Err(err) = client.send_message(Some(content), None) {
                    println!("Failed to send message. {}", err);
                }
            }
            Selection::SendFile => {
                let url = Url::parse(&prompt_string("File URL"))?;
                if let Err(err) = client.send_message(None, Some(url)) {
                    println!("Failed to send file. {}", err);
                }
            }
            Selection::SignalTyping => {
                client.set_typing();
                println!("Typing signaled. It times out after two idle seconds.");
            }
            Selection::ListMessages => {
                for message in client.messages() {
                    println!("{}", MessageRow(message));
                }
            }
            Selection::ListOnlineUsers => {
                println!("online: [{}]", ids(&client.online_users()));
            }
            Selection::ListPinnedMessages => {
                println!("pinned: [{}]", ids(&client.pinned_messages()));
            }
            Selection::DeleteMessage => {
                if let Err(err) = client.delete_message(prompt_message_id()).await {
                    println!("Failed to delete message. {}", err);
                }
            }
            Selection::TogglePin => {
                if let Err(err) = client.toggle_pin(prompt_message_id()).await {
                    println!("Failed to toggle pin. {}", err);
                }
            }
            Selection::React => {
                let id = prompt_message_id();
                let emoji = Emoji::from(prompt_string("Emoji"));
                if let Err(err) = client.react(id, emoji).await {
                    println!("Failed to react. {}", err);
                }
            }
            Selection::Disconnect => {
                client.close();
            }
            Selection::Noop => {}
            Selection::Exit => {
                client.close();
                return Ok(());
            }
        }
    }
}
