//! Backend API
//!
//! Fetch utility plus one wrapper per endpoint. Failures are logged here and
//! always returned to the caller.

use gloo_net::http::Request;
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::config;
use crate::error::ApiError;
use crate::models::{DistrictInfo, RecommendRequest, RecommendResponse};
use crate::routes;

// ========================
// Fetch Utility
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// Request options for [`fetch_data`]
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub method: Method,
    pub body: Option<Value>,
}

impl FetchOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// POST with a JSON body
    pub fn post_json<B: Serialize>(body: &B) -> Result<Self, serde_json::Error> {
        Ok(Self {
            method: Method::Post,
            body: Some(serde_json::to_value(body)?),
        })
    }
}

/// Perform a request and decode the JSON response body
pub async fn fetch_data<T: DeserializeOwned>(url: &str, options: FetchOptions) -> Result<T, ApiError> {
    debug!("[API] {:?} {}", options.method, url);
    let result = send(url, options).await;
    if let Err(e) = &result {
        error!("[API] {}", e);
    }
    result
}

async fn send<T: DeserializeOwned>(url: &str, options: FetchOptions) -> Result<T, ApiError> {
    let request_err = |source| ApiError::Request { url: url.to_string(), source };

    let request = match (options.method, options.body) {
        (Method::Get, _) => Request::get(url).build(),
        (Method::Post, Some(body)) => Request::post(url).json(&body),
        (Method::Post, None) => Request::post(url).build(),
    }
    .map_err(request_err)?;

    let response = request.send().await.map_err(request_err)?;
    let status = response.status();
    let text = response.text().await.map_err(request_err)?;
    decode_payload(url, status, &text)
}

/// Turn a raw response into a payload.
///
/// An object carrying an `error` key is a backend failure whatever the
/// status code; otherwise any non-2xx status fails before decoding.
pub fn decode_payload<T: DeserializeOwned>(url: &str, status: u16, text: &str) -> Result<T, ApiError> {
    let parsed = serde_json::from_str::<Value>(text);

    if let Ok(Value::Object(map)) = &parsed {
        if let Some(err) = map.get("error") {
            let message = err.as_str().map(str::to_string).unwrap_or_else(|| err.to_string());
            return Err(ApiError::Backend { url: url.to_string(), message });
        }
    }

    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, url: url.to_string() });
    }

    let decode_err = |source| ApiError::Decode { url: url.to_string(), source };
    let value = parsed.map_err(decode_err)?;
    serde_json::from_value(value).map_err(decode_err)
}

// ========================
// Endpoints
// ========================

/// `GET /api/district/{district}`
pub async fn district_info(district: &str) -> Result<DistrictInfo, ApiError> {
    let url = config().api_url(&routes::district_api_path(district));
    fetch_data(&url, FetchOptions::get()).await
}

/// `POST /api/recommend`
pub async fn recommend(request: &RecommendRequest) -> Result<RecommendResponse, ApiError> {
    let url = config().api_url(routes::RECOMMEND_API_PATH);
    let options = FetchOptions::post_json(request).map_err(|source| {
        let err = ApiError::Encode { url: url.clone(), source };
        error!("[API] {}", err);
        err
    })?;
    fetch_data(&url, options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Place;

    const URL: &str = "/api/recommend";

    #[test]
    fn test_decode_success() {
        let info: DistrictInfo = decode_payload(
            "/api/district/x",
            200,
            r#"{"district": "x", "weather": {"temp": 21, "precipitation": 10, "sky_stts": "구름많음"}, "stats": {"restaurants": 3, "attractions": 2, "cafes": 1}}"#,
        )
        .unwrap();
        assert_eq!(info.weather.unwrap().summary(), "21°C | 강수확률 10% | 구름많음");
        assert_eq!(info.stats.unwrap().cafes, 1);
    }

    #[test]
    fn test_error_payload_is_backend_failure() {
        let err = decode_payload::<RecommendResponse>(URL, 200, r#"{"error": "데이트 코스를 생성할 수 없습니다.", "district": "x"}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::Backend { ref message, .. } if message == "데이트 코스를 생성할 수 없습니다."));

        let err = decode_payload::<DistrictInfo>("/api/district/x", 500, r#"{"error": "데이터베이스 연결 실패"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Backend { .. }));
    }

    #[test]
    fn test_non_success_status() {
        let err = decode_payload::<DistrictInfo>("/api/district/x", 404, "<html>Not Found</html>").unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
        assert_eq!(err.url(), "/api/district/x");
    }

    #[test]
    fn test_malformed_payload() {
        let err = decode_payload::<Vec<Place>>(URL, 200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));

        // Missing list fields are a decode failure, not a partial render
        let err = decode_payload::<RecommendResponse>(URL, 200, r#"{"weather_info": {}, "restaurants": []}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn test_post_options_carry_body() {
        let options = FetchOptions::post_json(&serde_json::json!({"budget_range": 2})).unwrap();
        assert_eq!(options.method, Method::Post);
        assert_eq!(options.body.unwrap()["budget_range"], 2);
        assert_eq!(FetchOptions::get().method, Method::Get);
    }
}
