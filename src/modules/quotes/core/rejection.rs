#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("correlation id is missing or empty")]
    InvalidCorrelationId,

    #[error("malformed quote: {0}")]
    MalformedQuote(String),
}
