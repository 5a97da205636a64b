//! Message handlers module
//!
//! Converts Telegram messages into the transport-free shape the command
//! handlers work on.

use teloxide::types::Message;

/// One inbound text message with the identifiers needed to answer it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub user_id: i64,
    pub username: Option<String>,
    pub chat_id: i64,
    pub message_id: i32,
    pub text: String,
}

impl IncomingMessage {
    /// Extract the fields the bot needs; `None` for messages without a
    /// sender or without text (stickers, service messages, channel posts)
    pub fn from_telegram(msg: &Message) -> Option<Self> {
        let user = msg.from.as_ref()?;
        let text = msg.text()?;

        Some(Self {
            user_id: user.id.0 as i64,
            username: user.username.clone(),
            chat_id: msg.chat.id.0,
            message_id: msg.id.0,
            text: text.to_string(),
        })
    }
}
