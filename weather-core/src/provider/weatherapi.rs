use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::FetchError,
    model::{TemperatureUnit, WeatherData},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Client for the weatherapi.com "current conditions" endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    unit: TemperatureUnit,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            unit: TemperatureUnit::default(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = unit;
        self
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    temp_f: Option<f64>,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

impl WaResponse {
    fn into_weather(self, unit: TemperatureUnit) -> WeatherData {
        let temperature = match unit {
            TemperatureUnit::Celsius => self.current.temp_c,
            TemperatureUnit::Fahrenheit => {
                self.current.temp_f.unwrap_or(self.current.temp_c * 9.0 / 5.0 + 32.0)
            }
        };

        WeatherData {
            temperature,
            description: self.current.condition.text,
            location: self.location.name,
            unit,
        }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, location: &str) -> Result<WeatherData, FetchError> {
        let url = format!("{}/current.json", self.base_url);
        tracing::debug!(%url, location, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;
        Ok(parsed.into_weather(self.unit))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
