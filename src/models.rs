//! Frontend Models
//!
//! Payload shapes of the recommendation backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric reading that may arrive as a JSON number or a string
/// (decimal columns are serialized as strings by the backend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Zero and empty text count as "no value", like the page templates treat them
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Number(n) => *n == 0.0,
            Scalar::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// Render an optional reading, `-` when missing
pub fn reading(value: &Option<Scalar>) -> String {
    value.as_ref().map(Scalar::to_string).unwrap_or_else(|| "-".to_string())
}

// ========================
// District lookup
// ========================

/// `GET /api/district/{district}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DistrictInfo {
    pub district: Option<String>,
    pub weather: Option<DistrictWeather>,
    pub stats: Option<DistrictStats>,
}

/// Latest weather observation for a district
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DistrictWeather {
    pub temp: Option<Scalar>,
    pub precipitation: Option<Scalar>,
    pub sky_stts: Option<String>,
    pub humidity: Option<Scalar>,
    pub datetime: Option<String>,
}

impl DistrictWeather {
    /// `23.5°C | 강수확률 30% | 맑음`
    pub fn summary(&self) -> String {
        format!(
            "{}°C | 강수확률 {}% | {}",
            reading(&self.temp),
            reading(&self.precipitation),
            self.sky_stts.as_deref().unwrap_or("-"),
        )
    }
}

/// Number of known places in a district
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DistrictStats {
    pub restaurants: u32,
    pub attractions: u32,
    pub cafes: u32,
}

// ========================
// Recommendation
// ========================

/// `POST /api/recommend` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendRequest {
    pub district: Option<String>,
    pub food_category: String,
    pub budget_range: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
}

/// `POST /api/recommend` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendResponse {
    pub weather_info: CourseWeather,
    pub restaurants: Vec<Place>,
    pub attractions: Vec<Place>,
    pub cafes: Vec<Place>,
}

/// Weather summary attached to a recommendation
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CourseWeather {
    pub district: String,
    pub weather_status: String,
    pub discomfort_index: Option<Scalar>,
    pub rainfall: Option<Scalar>,
    pub solar_radiation: Option<Scalar>,
    pub recommend_outdoor: Option<bool>,
}

impl CourseWeather {
    /// Everything after the district name:
    /// `맑음 | 온도: 68.2°C | 강수량: 0mm`
    pub fn details(&self) -> String {
        let mut line = format!(
            "{} | 온도: {}°C | 강수량: {}mm",
            self.weather_status,
            reading(&self.discomfort_index),
            reading(&self.rainfall),
        );
        if self.recommend_outdoor == Some(false) {
            line.push_str(" | 실내 활동 추천");
        }
        line
    }
}

/// A recommended restaurant, attraction or cafe
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    pub name: String,
    pub category: Option<String>,
    pub score: Option<Scalar>,
    pub address: Option<String>,
    pub price_range: Option<String>,
}

impl Place {
    /// `한식 | 평점: 4.5`, with `정보 없음` for a missing score
    pub fn details(&self) -> String {
        let score = match &self.score {
            Some(score) if !score.is_blank() => score.to_string(),
            _ => "정보 없음".to_string(),
        };
        format!("{} | 평점: {}", self.category.as_deref().unwrap_or(""), score)
    }
}

/// The three place lists of a course, in course order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceKind {
    Restaurants,
    Attractions,
    Cafes,
}

impl PlaceKind {
    pub const ALL: [PlaceKind; 3] = [PlaceKind::Restaurants, PlaceKind::Attractions, PlaceKind::Cafes];

    /// Id of the container element and value of `data-type`
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceKind::Restaurants => "restaurants",
            PlaceKind::Attractions => "attractions",
            PlaceKind::Cafes => "cafes",
        }
    }
}
