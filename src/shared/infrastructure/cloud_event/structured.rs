use serde_json::{Map, Value as Json};
use std::collections::HashMap;

use super::{CloudEvent, CloudEventError, check_spec_version};

const CONTEXT_ATTRIBUTES: [&str; 9] = [
    "specversion",
    "id",
    "source",
    "type",
    "datacontenttype",
    "dataschema",
    "subject",
    "time",
    "data",
];

pub(super) fn decode(body: &[u8]) -> Result<CloudEvent, CloudEventError> {
    let mut envelope: Map<String, Json> = serde_json::from_slice(body)
        .map_err(|e| CloudEventError::InvalidEnvelope(e.to_string()))?;

    if envelope.contains_key("data_base64") {
        return Err(CloudEventError::InvalidData(
            "data_base64 is not supported".into(),
        ));
    }

    let spec_version = required(&envelope, "specversion")?;
    check_spec_version(&spec_version)?;

    let id = required(&envelope, "id")?;
    let source = required(&envelope, "source")?;
    let event_type = required(&envelope, "type")?;
    let data_content_type = envelope
        .get("datacontenttype")
        .and_then(Json::as_str)
        .map(str::to_string);
    let data = envelope.remove("data").filter(|data| !data.is_null());

    let extensions: HashMap<String, String> = envelope
        .into_iter()
        .filter(|(name, _)| !CONTEXT_ATTRIBUTES.contains(&name.as_str()))
        .filter_map(|(name, value)| {
            scalar_to_string(value).map(|value| (name.to_ascii_lowercase(), value))
        })
        .collect();

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

fn required(envelope: &Map<String, Json>, name: &'static str) -> Result<String, CloudEventError> {
    envelope
        .get(name)
        .and_then(Json::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(CloudEventError::MissingAttribute(name))
}

fn scalar_to_string(value: Json) -> Option<String> {
    match value {
        Json::String(value) => Some(value),
        Json::Number(value) => Some(value.to_string()),
        Json::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}
