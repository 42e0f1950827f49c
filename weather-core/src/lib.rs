//! Core library for the `weather-widget` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and its weatherapi.com client
//! - Formatting helpers for the widget card
//! - Search state (idle / loading / error / weather)
//!
//! It is used by `weather-widget-cli`, but can also back other front-ends.

pub mod config;
pub mod error;
pub mod message;
pub mod model;
pub mod provider;
pub mod widget;

pub use config::Config;
pub use error::FetchError;
pub use model::{TemperatureUnit, WeatherData};
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
pub use widget::{Widget, WidgetState, WidgetView};
