// Canonical quotes used across the test suites. Rates mirror the offers the
// loan broker banks send for a single request.

use serde_json::json;

use crate::modules::quotes::core::bank_quote::BankQuote;
use crate::modules::quotes::core::correlation_id::CorrelationId;

pub fn correlation_id(raw: &str) -> CorrelationId {
    CorrelationId::parse(Some(raw)).expect("fixture correlation id must be valid")
}

pub fn bank_quote(issuer: &str, rate: f64) -> BankQuote {
    BankQuote::try_new(issuer, rate).expect("fixture quote must be valid")
}

pub fn bank_premium(rate: f64) -> BankQuote {
    bank_quote("BankPremium", rate)
}

pub fn bank_star(rate: f64) -> BankQuote {
    bank_quote("BankStar", rate)
}

pub fn quote_payload(issuer: &str, rate: f64) -> serde_json::Value {
    json!({ "issuer": issuer, "rate": rate })
}
