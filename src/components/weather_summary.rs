//! Weather Summary Component

use leptos::prelude::*;

use crate::models::CourseWeather;

/// `<strong>강남구</strong> | 맑음 | 온도: 68.2°C | 강수량: 0mm`
#[component]
pub fn WeatherSummary(weather: CourseWeather) -> impl IntoView {
    view! {
        <strong>{weather.district.clone()}</strong>
        " | "
        {weather.details()}
    }
}
