//! Weather command handler

use tracing::info;
use crate::handlers::messages::IncomingMessage;
use crate::handlers::texts;
use crate::services::ServiceFactory;
use crate::utils::errors::WeatherBuddyError;
use crate::utils::logging::{log_api_error, log_handler_error, log_user_action};

/// Handle `/weather`: look up the saved city and report its temperature
///
/// The weather provider is never contacted when no city is saved.
pub async fn handle_weather(services: &ServiceFactory, msg: &IncomingMessage) -> String {
    let city = match services.user_service.city(msg.user_id).await {
        Ok(Some(city)) => city,
        Ok(None) => {
            info!(user_id = msg.user_id, "Weather requested without a saved city");
            return texts::CITY_NOT_SET.to_string();
        }
        Err(e) => {
            log_handler_error(msg.user_id, "weather", &e);
            return texts::PROCESSING_FAILED.to_string();
        }
    };

    let coordinates = match services.weather_service.resolve_coordinates(&city).await {
        Ok(coordinates) => coordinates,
        Err(e) => {
            log_handler_error(msg.user_id, "weather", &WeatherBuddyError::from(e));
            return texts::COORDINATES_NOT_FOUND.to_string();
        }
    };

    let weather = match services
        .weather_service
        .current_temperature(coordinates.lat, coordinates.lon)
        .await
    {
        Ok(weather) => weather,
        Err(e) => {
            let context = format!("lat={:.2} lon={:.2}", coordinates.lat, coordinates.lon);
            log_api_error("openweather", &e.to_string(), Some(&context));
            return texts::WEATHER_UNAVAILABLE.to_string();
        }
    };

    log_user_action(msg.user_id, "weather", Some(&city));
    texts::temperature(&city, weather.temperature)
}
