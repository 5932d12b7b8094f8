// In memory implementation of the QuoteStore port.
//
// Buckets live behind their own mutex so appends to one correlation id never
// wait on another. The map only guards bucket creation, done with
// `entry().or_default()` so racing first writers end up sharing one bucket.
// `clear` takes the reset gate exclusively; record and query hold it shared
// for their whole duration, so no append lands in a bucket that a concurrent
// clear has already detached.

use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use crate::modules::quotes::adapters::outbound::quote_store::QuoteStore;
use crate::modules::quotes::core::bank_quote::BankQuote;
use crate::modules::quotes::core::correlation_id::CorrelationId;

type Bucket = Arc<Mutex<Vec<BankQuote>>>;

#[derive(Default)]
pub struct InMemoryQuoteStore {
    buckets: DashMap<CorrelationId, Bucket>,
    reset_gate: RwLock<()>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn bucket_count(&self) -> usize {
        let _gate = self.reset_gate.read();
        self.buckets.len()
    }

    fn bucket(&self, correlation_id: CorrelationId) -> Bucket {
        // The shard guard must drop before the bucket is locked.
        self.buckets.entry(correlation_id).or_default().value().clone()
    }
}

impl QuoteStore for InMemoryQuoteStore {
    fn record(&self, correlation_id: CorrelationId, quote: BankQuote) {
        let _gate = self.reset_gate.read();
        let bucket = self.bucket(correlation_id);
        bucket.lock().push(quote);
    }

    fn query(&self, correlation_id: &str) -> Vec<BankQuote> {
        let _gate = self.reset_gate.read();
        let bucket = match self.buckets.get(correlation_id) {
            Some(entry) => entry.value().clone(),
            None => return Vec::new(),
        };
        bucket.lock().clone()
    }

    fn clear(&self) {
        let _gate = self.reset_gate.write();
        self.buckets.clear();
    }
}
