use crate::{Config, WeatherData, error::FetchError, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a free-text location query.
    async fn current(&self, location: &str) -> Result<WeatherData, FetchError>;
}

/// Construct the weatherapi.com provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolved_api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for weatherapi.com.\n\
                 Hint: run `weather-widget configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    let mut provider = WeatherApiProvider::new(api_key).with_unit(config.unit);
    if let Some(base_url) = &config.base_url {
        provider = provider.with_base_url(base_url.as_str());
    }

    Ok(Box::new(provider))
}
