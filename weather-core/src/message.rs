//! Human-readable sentences shown on the widget card.

use crate::model::TemperatureUnit;

/// Sentence describing how the temperature feels.
///
/// Celsius readings are bucketed at 0, 10, 20 and 30 degrees with the lower
/// bound of each bucket inclusive. Other units are printed as `{value} {unit}`.
pub fn temperature_message(temperature: f64, unit: TemperatureUnit) -> String {
    let t = display_number(temperature);

    match unit {
        TemperatureUnit::Celsius => {
            if temperature < 0.0 {
                format!("It's Freezing at {t}°C. Bundle up!")
            } else if temperature < 10.0 {
                format!("It's quite cold at {t}°C. Wear warm clothes.")
            } else if temperature < 20.0 {
                format!("The temperature is {t}°C. Comfortable for a light jacket.")
            } else if temperature < 30.0 {
                format!("It's a pleasant {t}°C. Enjoy the nice weather!")
            } else {
                format!("It's hot at {t}°C. Stay hydrated!")
            }
        }
        other => format!("{t} {}", other.symbol()),
    }
}

/// Sentence for a provider condition text. Matching is case-insensitive and exact.
pub fn weather_message(description: &str) -> &'static str {
    match description.to_lowercase().as_str() {
        "sunny" => "It's a beautiful sunny day!",
        "partly cloudy" => "Expect some clouds and sunshine.",
        "cloudy" => "It's cloudy today.",
        "overcast" => "The sky is overcast.",
        "rain" => "Don't forget your umbrella! It's raining.",
        "thunderstorm" => "Thunderstorms are expected today.",
        "snow" => "Bundle up! It's snowing.",
        "mist" => "It's misty outside.",
        "fog" => "Be careful, there's fog outside.",
        _ => "Weather description not available.",
    }
}

/// Night runs from 18:00 up to (not including) 06:00.
pub fn is_night(hour: u32) -> bool {
    !(6..18).contains(&hour)
}

pub fn location_message(location: &str, hour: u32) -> String {
    let time_of_day = if is_night(hour) { "at night" } else { "during the day" };
    format!("{location} {time_of_day}")
}

// `f64`'s Display already drops a trailing `.0`; only negative zero needs fixing.
fn display_number(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
