//! API Errors
//!
//! Every failed backend call ends up here. Pages decide whether a failure is
//! fatal; the variants only carry diagnostics.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: gloo_net::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("backend reported an error for {url}: {message}")]
    Backend { url: String, message: String },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode request body for {url}: {source}")]
    Encode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn url(&self) -> &str {
        match self {
            ApiError::Request { url, .. }
            | ApiError::Status { url, .. }
            | ApiError::Backend { url, .. }
            | ApiError::Decode { url, .. }
            | ApiError::Encode { url, .. } => url,
        }
    }
}
