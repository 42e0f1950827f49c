//! Search state behind the widget card.
//!
//! The widget is either idle, showing an error, or showing a reading; never
//! both an error and a reading.

use crate::{
    error::FetchError,
    message::{location_message, temperature_message, weather_message},
    model::WeatherData,
    provider::WeatherProvider,
};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a valid location.";
pub const NOT_FOUND_MESSAGE: &str = "City not found. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    pub weather: Option<WeatherData>,
    pub error: Option<String>,
    pub loading: bool,
}

/// What the card should display below the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetView {
    Idle,
    Error(String),
    Weather {
        temperature: String,
        condition: String,
        location: String,
    },
}

#[derive(Debug)]
pub struct Widget {
    provider: Box<dyn WeatherProvider>,
    state: WidgetState,
}

impl Widget {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider, state: WidgetState::default() }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Label for the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.state.loading { "Loading..." } else { "Search" }
    }

    /// Run one search. Blank input is rejected without contacting the provider.
    pub async fn search(&mut self, input: &str) {
        if let Some(query) = self.begin_search(input) {
            let result = self.fetch(&query).await;
            self.finish_search(&query, result);
        }
    }

    /// Validate the input and enter the loading state.
    ///
    /// Returns the trimmed query, or `None` when the input was blank and the
    /// validation error has been set.
    pub fn begin_search(&mut self, input: &str) -> Option<String> {
        let location = input.trim();
        if location.is_empty() {
            self.state.error = Some(EMPTY_INPUT_MESSAGE.to_string());
            self.state.weather = None;
            return None;
        }

        self.state.loading = true;
        self.state.error = None;
        Some(location.to_string())
    }

    /// Ask the provider for `query`; state is untouched until [`Widget::finish_search`].
    pub async fn fetch(&self, query: &str) -> Result<WeatherData, FetchError> {
        self.provider.current(query).await
    }

    /// Apply a fetch result and leave the loading state.
    pub fn finish_search(&mut self, query: &str, result: Result<WeatherData, FetchError>) {
        match result {
            Ok(weather) => {
                tracing::debug!(location = %weather.location, "weather loaded");
                self.state.weather = Some(weather);
                self.state.error = None;
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "error fetching weather data");
                self.state.weather = None;
                self.state.error = Some(NOT_FOUND_MESSAGE.to_string());
            }
        }

        self.state.loading = false;
    }

    /// Render model for the current state; `hour` is the local wall-clock hour.
    pub fn view(&self, hour: u32) -> WidgetView {
        if let Some(error) = &self.state.error {
            return WidgetView::Error(error.clone());
        }

        match &self.state.weather {
            Some(weather) => WidgetView::Weather {
                temperature: temperature_message(weather.temperature, weather.unit),
                condition: weather_message(&weather.description).to_string(),
                location: location_message(&weather.location, hour),
            },
            None => WidgetView::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TemperatureUnit;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use tokio::sync::Notify;

    #[derive(Debug)]
    struct FakeProvider {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current(&self, location: &str) -> Result<WeatherData, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(FetchError::Status {
                    status: StatusCode::BAD_REQUEST,
                    body: "No matching location found.".into(),
                });
            }
            Ok(WeatherData {
                temperature: 21.5,
                description: "Sunny".into(),
                location: location.to_uppercase(),
                unit: TemperatureUnit::Celsius,
            })
        }
    }

    fn widget(fail: bool) -> (Widget, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = FakeProvider { calls: Arc::clone(&calls), fail };
        (Widget::new(Box::new(provider)), calls)
    }

    #[tokio::test]
    async fn blank_input_never_calls_provider() {
        let (mut w, calls) = widget(false);

        for input in ["", "   ", "\t\n"] {
            w.search(input).await;
            assert_eq!(w.state().error.as_deref(), Some(EMPTY_INPUT_MESSAGE));
            assert!(w.state().weather.is_none());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_input_clears_previous_weather() {
        let (mut w, _) = widget(false);

        w.search("paris").await;
        assert!(w.state().weather.is_some());

        w.search(" ").await;
        assert!(w.state().weather.is_none());
        assert_eq!(w.state().error.as_deref(), Some(EMPTY_INPUT_MESSAGE));
    }

    #[tokio::test]
    async fn success_clears_error_and_sets_weather() {
        let (mut w, calls) = widget(false);

        w.search("").await;
        w.search("  paris ").await;

        let state = w.state();
        assert!(state.error.is_none());
        assert!(!state.loading);
        assert_eq!(state.weather.as_ref().map(|d| d.location.as_str()), Some("PARIS"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(w.submit_label(), "Search");
    }

    #[tokio::test]
    async fn failure_clears_weather_and_sets_error() {
        let (mut w, _) = widget(true);
        w.state.weather = Some(WeatherData {
            temperature: 1.0,
            description: "Snow".into(),
            location: "Oslo".into(),
            unit: TemperatureUnit::Celsius,
        });

        w.search("atlantis").await;

        let state = w.state();
        assert!(state.weather.is_none());
        assert_eq!(state.error.as_deref(), Some(NOT_FOUND_MESSAGE));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn view_formats_all_three_lines() {
        let (mut w, _) = widget(false);
        assert_eq!(w.view(12), WidgetView::Idle);

        w.search("rome").await;

        assert_eq!(
            w.view(20),
            WidgetView::Weather {
                temperature: "It's a pleasant 21.5°C. Enjoy the nice weather!".into(),
                condition: "It's a beautiful sunny day!".into(),
                location: "ROME at night".into(),
            }
        );
    }

    #[tokio::test]
    async fn view_shows_error() {
        let (mut w, _) = widget(true);
        w.search("nowhere").await;

        assert_eq!(w.view(9), WidgetView::Error(NOT_FOUND_MESSAGE.into()));
    }

    /// Holds every call open until released.
    #[derive(Debug)]
    struct GatedProvider {
        started: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl WeatherProvider for GatedProvider {
        async fn current(&self, location: &str) -> Result<WeatherData, FetchError> {
            self.started.notify_one();
            self.release.notified().await;
            Ok(WeatherData {
                temperature: -2.0,
                description: "Snow".into(),
                location: location.into(),
                unit: TemperatureUnit::Celsius,
            })
        }
    }

    #[tokio::test]
    async fn loading_is_visible_while_fetch_is_pending() {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let mut w = Widget::new(Box::new(GatedProvider {
            started: Arc::clone(&started),
            release: Arc::clone(&release),
        }));

        let query = w.begin_search("  oslo ").expect("non-blank input starts a search");
        assert_eq!(query, "oslo");

        let (result, ()) = tokio::join!(w.fetch(&query), async {
            started.notified().await;
            assert!(w.state().loading);
            assert!(w.state().error.is_none());
            assert_eq!(w.submit_label(), "Loading...");
            release.notify_one();
        });

        w.finish_search(&query, result);
        assert!(!w.state().loading);
        assert_eq!(w.submit_label(), "Search");
        assert_eq!(w.state().weather.as_ref().map(|d| d.location.as_str()), Some("oslo"));
    }

    #[tokio::test]
    async fn blank_input_does_not_enter_loading() {
        let (mut w, _) = widget(false);

        assert!(w.begin_search("   ").is_none());
        assert!(!w.state().loading);
        assert_eq!(w.submit_label(), "Search");
    }
}
