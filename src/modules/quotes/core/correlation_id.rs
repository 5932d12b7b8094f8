use std::borrow::Borrow;
use std::fmt;

use crate::modules::quotes::core::rejection::RejectionReason;

/// Opaque token grouping the quotes of one workflow instance.
///
/// Compared byte for byte: no trimming or case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    pub fn parse(raw: Option<&str>) -> Result<Self, RejectionReason> {
        match raw {
            Some(value) if !value.is_empty() => Ok(Self(value.to_string())),
            _ => Err(RejectionReason::InvalidCorrelationId),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CorrelationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
