//! Bot handlers module
//!
//! The command dispatcher and its pieces:
//! - Command parsing and one handler per command
//! - Conversion from Telegram messages
//! - Reply delivery

pub mod commands;
pub mod messages;
pub mod reply;
pub mod texts;

pub use commands::Command;
pub use messages::IncomingMessage;
pub use reply::{ReplySender, TelegramReplySender};

use std::sync::Arc;
use tracing::{debug, error, info, trace};
use crate::services::ServiceFactory;
use crate::utils::logging::log_handler_error;

/// Routes inbound messages to command handlers and sends the replies
///
/// Holds no per-user state; everything that survives an update lives in
/// the user store.
#[derive(Clone)]
pub struct CommandDispatcher {
    services: ServiceFactory,
    replies: Arc<dyn ReplySender>,
    log_updates: bool,
}

impl CommandDispatcher {
    pub fn new(services: ServiceFactory, replies: Arc<dyn ReplySender>) -> Self {
        Self {
            services,
            replies,
            log_updates: false,
        }
    }

    /// Log every inbound message at info level
    pub fn with_update_logging(mut self, enabled: bool) -> Self {
        self.log_updates = enabled;
        self
    }

    /// Process one inbound message to completion
    ///
    /// Returns the command that was handled, or `None` when the message was
    /// not a command and got ignored. Failures are logged and answered with
    /// a short reply; they are never returned.
    pub async fn dispatch(&self, msg: &IncomingMessage) -> Option<Command> {
        if self.log_updates {
            info!(
                user_id = msg.user_id,
                chat_id = msg.chat_id,
                message_id = msg.message_id,
                text = %msg.text,
                "Inbound message"
            );
        }

        let Some(command) = Command::parse(&msg.text) else {
            trace!(user_id = msg.user_id, "Ignoring non-command message");
            return None;
        };

        debug!(user_id = msg.user_id, chat_id = msg.chat_id, command = command.name(), "Processing command");

        if let Err(e) = self.services.user_service.ensure_user(msg.user_id).await {
            log_handler_error(msg.user_id, command.name(), &e);
            self.reply(msg, texts::PROCESSING_FAILED).await;
            return Some(command);
        }

        let text = match &command {
            Command::City(city) => commands::city::handle_city(&self.services, msg, city).await,
            Command::Weather => commands::weather::handle_weather(&self.services, msg).await,
            Command::Unknown(name) => commands::unknown::handle_unknown(msg, name),
        };

        self.reply(msg, &text).await;
        Some(command)
    }

    async fn reply(&self, msg: &IncomingMessage, text: &str) {
        if let Err(e) = self
            .replies
            .send_reply(msg.chat_id, Some(msg.message_id), text)
            .await
        {
            error!(chat_id = msg.chat_id, user_id = msg.user_id, error = %e, "Failed to send reply");
        }
    }
}
