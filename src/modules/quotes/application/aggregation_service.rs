use std::sync::Arc;

use crate::modules::quotes::adapters::outbound::quote_store::QuoteStore;
use crate::modules::quotes::core::bank_quote::BankQuote;
use crate::modules::quotes::core::correlation_id::CorrelationId;
use crate::modules::quotes::core::rejection::RejectionReason;

#[derive(Debug, Clone, PartialEq)]
pub struct Accepted {
    pub correlation_id: CorrelationId,
    pub quote: BankQuote,
}

/// Boundary between the inbound/outbound adapters and the quote store.
///
/// Validation happens here so that nothing malformed ever reaches the store.
pub struct AggregationService<TStore>
where
    TStore: QuoteStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> AggregationService<TStore>
where
    TStore: QuoteStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub fn handle_incoming(
        &self,
        correlation_id: Option<&str>,
        payload: &serde_json::Value,
    ) -> Result<Accepted, RejectionReason> {
        let decoded = CorrelationId::parse(correlation_id)
            .and_then(|id| BankQuote::from_payload(payload).map(|quote| (id, quote)));

        let (correlation_id, quote) = match decoded {
            Ok(decoded) => decoded,
            Err(reason) => {
                tracing::warn!(%reason, "rejected bank quote");
                return Err(reason);
            }
        };

        self.store.record(correlation_id.clone(), quote.clone());
        tracing::info!(
            correlation_id = %correlation_id,
            issuer = %quote.issuer,
            rate = quote.rate,
            "bank quote aggregated"
        );
        Ok(Accepted {
            correlation_id,
            quote,
        })
    }

    pub fn list_quotes(&self, correlation_id: &str) -> Vec<BankQuote> {
        self.store.query(correlation_id)
    }

    pub fn reset(&self) {
        self.store.clear();
        tracing::info!("quote repository cleared");
    }
}
