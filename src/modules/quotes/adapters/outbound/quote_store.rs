use crate::modules::quotes::core::bank_quote::BankQuote;
use crate::modules::quotes::core::correlation_id::CorrelationId;

/// Per correlation id accumulation of quotes.
///
/// Implementations own all synchronization. Inputs are assumed valid:
/// validation happens before a quote reaches the store.
pub trait QuoteStore: Send + Sync {
    fn record(&self, correlation_id: CorrelationId, quote: BankQuote);

    /// Snapshot of the bucket, empty when the id was never recorded.
    fn query(&self, correlation_id: &str) -> Vec<BankQuote>;

    fn clear(&self);
}
