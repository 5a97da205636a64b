//! City command handler

use tracing::warn;
use crate::handlers::messages::IncomingMessage;
use crate::handlers::texts;
use crate::services::ServiceFactory;
use crate::utils::errors::WeatherBuddyError;
use crate::utils::logging::{log_handler_error, log_user_action};

/// Handle `/city <name>`: save the city and confirm
pub async fn handle_city(services: &ServiceFactory, msg: &IncomingMessage, city: &str) -> String {
    match services.user_service.set_city(msg.user_id, city).await {
        Ok(saved) => {
            log_user_action(msg.user_id, "set_city", Some(&saved));
            texts::city_saved(&saved)
        }
        Err(WeatherBuddyError::InvalidInput(reason)) => {
            warn!(user_id = msg.user_id, reason = %reason, "City command without a city");
            texts::CITY_USAGE.to_string()
        }
        Err(e) => {
            log_handler_error(msg.user_id, "city", &e);
            texts::CITY_SAVE_FAILED.to_string()
        }
    }
}
