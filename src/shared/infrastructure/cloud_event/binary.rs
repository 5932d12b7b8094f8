use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue};
use std::collections::HashMap;

use super::{CloudEvent, CloudEventError, check_spec_version};

const HEADER_PREFIX: &str = "ce-";
const CONTEXT_ATTRIBUTES: [&str; 7] = [
    "specversion",
    "id",
    "source",
    "type",
    "dataschema",
    "subject",
    "time",
];

pub(super) fn decode(headers: &HeaderMap, body: &[u8]) -> Result<CloudEvent, CloudEventError> {
    let spec_version = required(headers, "specversion")?;
    check_spec_version(&spec_version)?;

    let id = required(headers, "id")?;
    let source = required(headers, "source")?;
    let event_type = required(headers, "type")?;
    let data_content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    // Header names are already lowercase in `HeaderMap`.
    let extensions: HashMap<String, String> = headers
        .iter()
        .filter_map(|(name, value)| {
            let attribute = name.as_str().strip_prefix(HEADER_PREFIX)?;
            if CONTEXT_ATTRIBUTES.contains(&attribute) {
                return None;
            }
            let value = decode_value(value).ok()?;
            Some((attribute.to_string(), value))
        })
        .collect();

    let data = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        Some(
            serde_json::from_slice::<serde_json::Value>(body)
                .map_err(|e| CloudEventError::InvalidData(e.to_string()))?,
        )
    };

    Ok(CloudEvent {
        id,
        source,
        event_type,
        spec_version,
        data_content_type,
        extensions,
        data,
    })
}

fn required(headers: &HeaderMap, attribute: &'static str) -> Result<String, CloudEventError> {
    let value = headers
        .get(format!("{HEADER_PREFIX}{attribute}"))
        .ok_or(CloudEventError::MissingAttribute(attribute))?;
    let value = decode_value(value)
        .map_err(|reason| CloudEventError::InvalidAttribute { attribute, reason })?;
    if value.is_empty() {
        return Err(CloudEventError::MissingAttribute(attribute));
    }
    Ok(value)
}

// The HTTP binding percent-encodes space, `"` and `%` (and any non-ASCII
// byte) in attribute values.
fn decode_value(value: &HeaderValue) -> Result<String, String> {
    let raw = value.to_str().map_err(|e| e.to_string())?;
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| e.to_string())
}
