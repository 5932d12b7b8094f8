// CloudEvents v1.0 envelope decoding for inbound HTTP deliveries.
//
// Both content modes are understood:
// - structured: the whole event is a JSON document sent as
//   `application/cloudevents+json`;
// - binary: attributes travel as `ce-*` headers and the body is the data.
//
// Only JSON data is supported; `data_base64` payloads are refused.

use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde_json::Value as Json;
use std::collections::HashMap;
use thiserror::Error;

mod binary;
mod structured;

pub const STRUCTURED_CONTENT_TYPE: &str = "application/cloudevents+json";
pub const SUPPORTED_SPEC_VERSION: &str = "1.0";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CloudEventError {
    #[error("envelope is not a valid JSON object: {0}")]
    InvalidEnvelope(String),

    #[error("missing required attribute `{0}`")]
    MissingAttribute(&'static str),

    #[error("attribute `{attribute}` is not valid: {reason}")]
    InvalidAttribute {
        attribute: &'static str,
        reason: String,
    },

    #[error("unsupported spec version `{0}`")]
    UnsupportedSpecVersion(String),

    #[error("event data is not valid JSON: {0}")]
    InvalidData(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloudEvent {
    pub id: String,
    pub source: String,
    pub event_type: String,
    pub spec_version: String,
    pub data_content_type: Option<String>,
    /// Extension attributes keyed by their lowercased name.
    pub extensions: HashMap<String, String>,
    pub data: Option<Json>,
}

impl CloudEvent {
    pub fn from_http(headers: &HeaderMap, body: &[u8]) -> Result<Self, CloudEventError> {
        let is_structured = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                let media_type = value.split(';').next().unwrap_or_default();
                media_type
                    .trim()
                    .eq_ignore_ascii_case(STRUCTURED_CONTENT_TYPE)
            })
            .unwrap_or(false);

        if is_structured {
            Self::from_structured(body)
        } else {
            Self::from_binary(headers, body)
        }
    }

    pub fn from_structured(body: &[u8]) -> Result<Self, CloudEventError> {
        structured::decode(body)
    }

    pub fn from_binary(headers: &HeaderMap, body: &[u8]) -> Result<Self, CloudEventError> {
        binary::decode(headers, body)
    }

    pub fn extension(&self, name: &str) -> Option<&str> {
        self.extensions
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

fn check_spec_version(spec_version: &str) -> Result<(), CloudEventError> {
    if spec_version == SUPPORTED_SPEC_VERSION {
        Ok(())
    } else {
        Err(CloudEventError::UnsupportedSpecVersion(
            spec_version.to_string(),
        ))
    }
}
