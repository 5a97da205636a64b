//! Command handlers module
//!
//! Parsing of the leading command token and one handler per command. Each
//! handler returns the reply text; sending it is the dispatcher's job.

pub mod city;
pub mod unknown;
pub mod weather;

use teloxide::types::BotCommand;

/// A classified inbound command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/city <name>`; the name may be empty when no argument was given
    City(String),
    /// `/weather`
    Weather,
    /// Any other `/token`
    Unknown(String),
}

impl Command {
    /// Classify a message text, `None` when it is not a command
    ///
    /// The `@botname` suffix Telegram appends in group chats is ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix('/')?;
        let (token, args) = match rest.split_once(char::is_whitespace) {
            Some((token, args)) => (token, args.trim()),
            None => (rest, ""),
        };
        let name = match token.split_once('@') {
            Some((name, _bot)) => name,
            None => token,
        };

        if name.is_empty() {
            return None;
        }

        Some(match name {
            "city" => Command::City(args.to_string()),
            "weather" => Command::Weather,
            other => Command::Unknown(other.to_string()),
        })
    }

    /// Short name used in logs
    pub fn name(&self) -> &str {
        match self {
            Command::City(_) => "city",
            Command::Weather => "weather",
            Command::Unknown(name) => name.as_str(),
        }
    }
}

/// Command menu registered with Telegram at startup
pub fn bot_commands() -> Vec<BotCommand> {
    vec![
        BotCommand::new("city", "Save your city, e.g. /city London"),
        BotCommand::new("weather", "Current temperature in your saved city"),
    ]
}
