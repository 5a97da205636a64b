//! Fallback for commands the bot does not support

use tracing::warn;
use crate::handlers::messages::IncomingMessage;
use crate::handlers::texts;

/// Reply to an unsupported command without touching any stored state
pub fn handle_unknown(msg: &IncomingMessage, command: &str) -> String {
    warn!(
        user_id = msg.user_id,
        username = ?msg.username,
        command = command,
        text = %msg.text,
        "Unknown command"
    );
    texts::UNSUPPORTED_COMMAND.to_string()
}
