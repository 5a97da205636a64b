//! Helper functions and utilities
//!
//! Small formatting and parsing helpers shared by the handlers.

/// Round a Celsius reading to the nearest whole degree, halves away from zero
pub fn round_temperature(celsius: f64) -> i64 {
    // -0.0 casts to 0, so small negatives never render as "-0°C"
    celsius.round() as i64
}

/// Format a temperature for chat display, e.g. `22°C`
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", round_temperature(celsius))
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Mask a secret for log output, keeping only the last four characters
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}
