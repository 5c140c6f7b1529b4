//! UI Components
//!
//! Leptos views mounted into the server-rendered result page.

mod place_list;
mod weather_summary;

pub use place_list::PlaceList;
pub use weather_summary::WeatherSummary;
