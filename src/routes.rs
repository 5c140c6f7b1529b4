//! Page Routes
//!
//! Query-string parsing and the URLs the flow navigates to. Page state only
//! survives a navigation through these query parameters.

use std::collections::HashMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::budget::BudgetRange;

/// Food category sent when the user picked none
pub const RANDOM_CATEGORY: &str = "랜덤";

/// Characters escaped inside a path segment or query value
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'=')
    .add(b'`');

/// Place names additionally escape the list separator
const MAP_NAME: &AsciiSet = &COMPONENT.add(b',');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Parse `?a=1&b=2` (leading `?` optional). Later duplicates are ignored.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.entry(decode(key)).or_insert_with(|| decode(value));
    }
    params
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// `/select/{district}?district={district}`
pub fn select_url(district: &str) -> String {
    let district = encode(district);
    format!("/select/{district}?district={district}")
}

/// `/result?district=..&food_category=..&budget_range=..`
pub fn result_url(district: Option<&str>, food_category: Option<&str>, budget: BudgetRange) -> String {
    format!(
        "/result?district={}&food_category={}&budget_range={}",
        district.map(encode).unwrap_or_else(|| "null".to_string()),
        encode(food_category.unwrap_or(RANDOM_CATEGORY)),
        budget.index(),
    )
}

/// External map link listing the course places in order
pub fn map_url(base: &str, names: &[&str]) -> String {
    let names: Vec<String> = names
        .iter()
        .map(|name| utf8_percent_encode(name, MAP_NAME).to_string())
        .collect();
    format!("{}{}", base, names.join(","))
}

/// `/api/district/{district}`
pub fn district_api_path(district: &str) -> String {
    format!("/api/district/{}", encode(district))
}

pub const RECOMMEND_API_PATH: &str = "/api/recommend";
