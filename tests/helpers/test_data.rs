//! Test data helpers
//!
//! Builders for inbound messages, a failing user store, and a dispatcher
//! wired to the mock weather provider.

use std::sync::Arc;
use async_trait::async_trait;
use weather_buddy::database::{InMemoryUserStore, UserStore};
use weather_buddy::handlers::CommandDispatcher;
use weather_buddy::models::User;
use weather_buddy::services::ServiceFactory;
use weather_buddy::{IncomingMessage, Result, WeatherBuddyError};

use super::reply_recorder::RecordingReplySender;
use super::weather_mock::WeatherMockServer;

pub fn test_user_id() -> i64 {
    987654321
}

pub fn test_chat_id() -> i64 {
    987654321
}

/// An inbound private-chat message from the test user
pub fn incoming(text: &str, message_id: i32) -> IncomingMessage {
    IncomingMessage {
        user_id: test_user_id(),
        username: Some("test_user".to_string()),
        chat_id: test_chat_id(),
        message_id,
        text: text.to_string(),
    }
}

/// Dispatcher over an in-memory store, the mock provider, and a reply recorder
pub struct TestBot {
    pub dispatcher: CommandDispatcher,
    pub store: Arc<InMemoryUserStore>,
    pub replies: Arc<RecordingReplySender>,
    pub weather: WeatherMockServer,
}

impl TestBot {
    pub async fn new() -> Self {
        let weather = WeatherMockServer::new().await;
        let store = Arc::new(InMemoryUserStore::new());
        let replies = Arc::new(RecordingReplySender::new());

        let services = ServiceFactory::with_weather(store.clone(), Arc::new(weather.weather_service()));
        let dispatcher = CommandDispatcher::new(services, replies.clone());

        Self {
            dispatcher,
            store,
            replies,
            weather,
        }
    }

    /// Dispatch `text` as a new message and return the reply text
    pub async fn send(&self, text: &str, message_id: i32) -> Option<String> {
        let before = self.replies.replies().len();
        self.dispatcher.dispatch(&incoming(text, message_id)).await;
        let replies = self.replies.replies();
        if replies.len() > before {
            replies.last().map(|reply| reply.text.clone())
        } else {
            None
        }
    }
}

/// A store whose every call fails like a dropped database connection
#[derive(Debug, Default)]
pub struct FailingUserStore;

fn unavailable() -> WeatherBuddyError {
    WeatherBuddyError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl UserStore for FailingUserStore {
    async fn exists(&self, _user_id: i64) -> Result<bool> {
        Err(unavailable())
    }

    async fn create(&self, _user_id: i64) -> Result<()> {
        Err(unavailable())
    }

    async fn get_city(&self, _user_id: i64) -> Result<String> {
        Err(unavailable())
    }

    async fn set_city(&self, _user_id: i64, _city: &str) -> Result<()> {
        Err(unavailable())
    }

    async fn get_user(&self, _user_id: i64) -> Result<Option<User>> {
        Err(unavailable())
    }
}
