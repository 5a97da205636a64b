//! Weather Buddy Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use tracing::{debug, info, warn};

use weather_buddy::{
    config::{EnvFile, Settings},
    utils::logging,
    database::DatabaseService,
    services::ServiceFactory,
    handlers::{commands::bot_commands, CommandDispatcher, IncomingMessage, TelegramReplySender},
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration; the .env outcome is reported once logging is up
    let env_file = EnvFile::load();
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate().context("invalid configuration")?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;
    env_file.log();

    info!("Starting {}...", weather_buddy::info());

    let database = DatabaseService::connect(&settings.database)
        .await
        .context("unable to connect to database")?;

    info!("Initializing services...");
    let services = ServiceFactory::new(&settings, database.users.clone())?;

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    let me = bot.get_me().await.context("bot authorization failed, check BOT_TOKEN")?;
    info!(
        username = ?me.username,
        bot_id = me.id.0,
        "Bot authorized"
    );

    if let Err(e) = bot.set_my_commands(bot_commands()).await {
        warn!(error = %e, "Failed to register the command menu");
    }

    let dispatcher = CommandDispatcher::new(services, Arc::new(TelegramReplySender::new(bot.clone())))
        .with_update_logging(settings.bot.debug);

    let mut update_dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![Arc::new(dispatcher)])
        // One key for every update: process strictly one at a time, in order
        .distribution_function(|_| Some(()))
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Bot started listening for incoming messages...");
    update_dispatcher.dispatch().await;

    info!("Weather Buddy bot has been shut down.");
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message().endpoint(handle_message)
}

/// Handle one inbound message
async fn handle_message(msg: Message, dispatcher: Arc<CommandDispatcher>) -> HandlerResult {
    match IncomingMessage::from_telegram(&msg) {
        Some(incoming) => {
            dispatcher.dispatch(&incoming).await;
        }
        None => debug!(chat_id = msg.chat.id.0, "Ignoring message without sender or text"),
    }

    Ok(())
}
