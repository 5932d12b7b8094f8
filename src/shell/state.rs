use crate::modules::quotes::adapters::outbound::quote_store_in_memory::InMemoryQuoteStore;
use crate::modules::quotes::application::aggregation_service::AggregationService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<AggregationService<InMemoryQuoteStore>>,
    /// Lowercased name of the CloudEvent extension carrying the correlation id.
    pub correlation_attribute: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryQuoteStore>, correlation_attribute: &str) -> Self {
        Self {
            aggregator: Arc::new(AggregationService::new(store)),
            correlation_attribute: Arc::from(correlation_attribute.to_ascii_lowercase()),
        }
    }
}
