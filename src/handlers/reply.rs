//! Reply sending
//!
//! Handlers produce text; a `ReplySender` delivers it, threaded to the
//! message that triggered it.

use async_trait::async_trait;
use teloxide::{
    payloads::SendMessageSetters,
    requests::Requester,
    types::{ChatId, MessageId, ReplyParameters},
    Bot,
};
use tracing::debug;
use crate::utils::errors::Result;

#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Send `text` to the chat, as a reply to `reply_to` when given
    async fn send_reply(&self, chat_id: i64, reply_to: Option<i32>, text: &str) -> Result<()>;
}

/// Sends replies through the Telegram Bot API
#[derive(Clone)]
pub struct TelegramReplySender {
    bot: Bot,
}

impl TelegramReplySender {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ReplySender for TelegramReplySender {
    async fn send_reply(&self, chat_id: i64, reply_to: Option<i32>, text: &str) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat_id), text);
        let request = match reply_to {
            Some(message_id) => request.reply_parameters(ReplyParameters::new(MessageId(message_id))),
            None => request,
        };

        let sent = request.await?;
        debug!(chat_id = chat_id, message_id = sent.id.0, "Reply sent");
        Ok(())
    }
}
