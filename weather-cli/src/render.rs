//! Plain-text rendering of the widget card.

use weather_widget_core::WidgetView;

const TITLE: &str = "Weather Widget";
const DESCRIPTION: &str = "Search for the current weather conditions in your city.";

pub fn header() -> String {
    format!("{TITLE}\n{DESCRIPTION}\n\n")
}

pub fn body(view: &WidgetView) -> String {
    match view {
        WidgetView::Idle => String::new(),
        WidgetView::Error(message) => format!("{message}\n\n"),
        WidgetView::Weather { temperature, condition, location } => {
            format!("🌡  {temperature}\n☁  {condition}\n📍 {location}\n\n")
        }
    }
}

pub fn card(view: &WidgetView) -> String {
    header() + &body(view)
}
