// Bank offer deliveries as the loan broker workflow emits them.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue};
use serde_json::json;

pub const BANK_OFFER_TYPE: &str = "kogito.serverless.loanbroker.bank.offer";

pub fn structured_bank_offer(workflow_instance_id: &str, data: serde_json::Value) -> String {
    json!({
        "specversion": "1.0",
        "id": "123456",
        "source": "/local/tests",
        "type": BANK_OFFER_TYPE,
        "datacontenttype": "application/json",
        "kogitoprocinstanceid": workflow_instance_id,
        "data": data,
    })
    .to_string()
}

pub fn binary_headers(workflow_instance_id: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert("ce-specversion", HeaderValue::from_static("1.0"));
    headers.insert("ce-id", HeaderValue::from_static("123456"));
    headers.insert("ce-source", HeaderValue::from_static("/local/tests"));
    headers.insert("ce-type", HeaderValue::from_static(BANK_OFFER_TYPE));
    headers.insert(
        "ce-kogitoprocinstanceid",
        HeaderValue::from_str(workflow_instance_id).expect("fixture id must be a valid header"),
    );
    headers
}
