//! Fixed reply texts

use crate::utils::helpers::format_temperature;

pub const PROCESSING_FAILED: &str =
    "Something went wrong while processing your command. Please try again.";

pub const CITY_USAGE: &str = "Please tell me the city, for example: /city London";

pub const CITY_SAVE_FAILED: &str = "Could not save the city. Please try again.";

pub const CITY_NOT_SET: &str =
    "I don't know your city yet. Please set it with /city <city name>.";

pub const COORDINATES_NOT_FOUND: &str = "Could not find coordinates for your city.";

pub const WEATHER_UNAVAILABLE: &str = "Could not get the weather right now. Please try again later.";

pub const UNSUPPORTED_COMMAND: &str = "This command is not supported. Use /city or /weather";

pub fn city_saved(city: &str) -> String {
    format!("City {} saved", city)
}

pub fn temperature(city: &str, celsius: f64) -> String {
    format!("Temperature in {}: {}", city, format_temperature(celsius))
}
