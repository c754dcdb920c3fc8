//! Online backend using the public Google Translate endpoint.

use super::TranslationBackend;
use crate::error::Error;
use crate::Result;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

pub struct GoogleTranslateBackend {
    client: Client,
    endpoint: String,
}

impl GoogleTranslateBackend {
    /// Creates a backend whose requests fail after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, timeout)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("txt2latex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl TranslationBackend for GoogleTranslateBackend {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let body = self
            .client
            .post(&self.endpoint)
            .query(&[("client", "gtx"), ("sl", source), ("tl", target), ("dt", "t")])
            .form(&[("q", text)])
            .send()?
            .error_for_status()?
            .text()?;
        parse_response(&body)
    }
}

/// Concatenates the translated segments of a `translate_a/single` reply:
/// `[[["translated", "source", ...], ...], ...]`.
fn parse_response(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::Translation(format!("malformed response: {e}")))?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Translation("response has no segments".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();
    if text.trim().is_empty() {
        return Err(Error::Translation("empty translation".to_string()));
    }
    Ok(text)
}
