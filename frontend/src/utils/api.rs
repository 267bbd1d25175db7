use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Thin client for the public backend API. Nothing here needs credentials.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
    path: String,
}

impl RequestWrapper {
    fn new(path: &str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        Self {
            request: Request::get(&full_url),
            path: path.to_string(),
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    pub async fn send(self) -> Result<Response, FetchError> {
        self.request
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{}: {}", self.path, e)))
    }

    /// Send and return the body text, treating any non-2xx status as a failure.
    pub async fn fetch_text(self) -> Result<String, FetchError> {
        let response = self.send().await?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }
        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }

    pub async fn fetch_json<T: DeserializeOwned>(self) -> Result<T, FetchError> {
        let body = self.fetch_text().await?;
        decode_json(&body)
    }
}

/// Decode a response body; anything serde rejects counts as a malformed payload.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))
}

impl Api {
    /// Create a GET request against the backend URL
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        value: u32,
    }

    #[test]
    fn decode_json_reads_valid_body() {
        assert_eq!(decode_json::<Sample>(r#"{"value": 7}"#), Ok(Sample { value: 7 }));
    }

    #[test]
    fn decode_json_flags_bad_body_as_malformed() {
        assert!(matches!(decode_json::<Sample>("<html>"), Err(FetchError::Malformed(_))));
        assert!(matches!(decode_json::<Sample>("{}"), Err(FetchError::Malformed(_))));
    }
}
