use serde::{Deserialize, Serialize};

use crate::modules::quotes::core::rejection::RejectionReason;

/// An offer made by one bank for one loan request.
///
/// Two quotes with the same issuer and rate are equal, yet both are kept
/// when recorded: buckets count arrivals, not distinct offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankQuote {
    pub issuer: String,
    pub rate: f64,
}

impl BankQuote {
    pub fn try_new(issuer: impl Into<String>, rate: f64) -> Result<Self, RejectionReason> {
        let issuer = issuer.into();
        if issuer.trim().is_empty() {
            return Err(RejectionReason::MalformedQuote(
                "issuer must not be empty".into(),
            ));
        }
        if !rate.is_finite() {
            return Err(RejectionReason::MalformedQuote(format!(
                "rate must be a finite number, got {rate}"
            )));
        }
        Ok(Self { issuer, rate })
    }

    /// Structural decoding of an inbound `{ "issuer": .., "rate": .. }` body.
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self, RejectionReason> {
        let decoded = Self::deserialize(payload)
            .map_err(|e| RejectionReason::MalformedQuote(e.to_string()))?;
        Self::try_new(decoded.issuer, decoded.rate)
    }
}
