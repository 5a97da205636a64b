//! Reply senders for tests
//!
//! `RecordingReplySender` keeps every reply instead of calling Telegram;
//! `FailingReplySender` rejects every send.

use std::sync::Mutex;
use async_trait::async_trait;
use weather_buddy::handlers::ReplySender;
use weather_buddy::{Result, WeatherBuddyError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReply {
    pub chat_id: i64,
    pub reply_to: Option<i32>,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct RecordingReplySender {
    sent: Mutex<Vec<SentReply>>,
}

impl RecordingReplySender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replies(&self) -> Vec<SentReply> {
        self.sent.lock().expect("reply log poisoned").clone()
    }

    pub fn last_text(&self) -> Option<String> {
        self.replies().last().map(|reply| reply.text.clone())
    }
}

#[async_trait]
impl ReplySender for RecordingReplySender {
    async fn send_reply(&self, chat_id: i64, reply_to: Option<i32>, text: &str) -> Result<()> {
        self.sent.lock().expect("reply log poisoned").push(SentReply {
            chat_id,
            reply_to,
            text: text.to_string(),
        });
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FailingReplySender;

#[async_trait]
impl ReplySender for FailingReplySender {
    async fn send_reply(&self, _chat_id: i64, _reply_to: Option<i32>, _text: &str) -> Result<()> {
        Err(WeatherBuddyError::InvalidInput("chat not found".to_string()))
    }
}
