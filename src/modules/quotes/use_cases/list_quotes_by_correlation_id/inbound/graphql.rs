use async_graphql::{Context, Object};

use crate::modules::quotes::core::bank_quote::BankQuote;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "BankQuote")]
pub struct GqlBankQuote {
    pub issuer: String,
    pub rate: f64,
}

impl From<BankQuote> for GqlBankQuote {
    fn from(quote: BankQuote) -> Self {
        Self {
            issuer: quote.issuer,
            rate: quote.rate,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn quotes_by_correlation_id(
        &self,
        context: &Context<'_>,
        correlation_id: String,
    ) -> Vec<GqlBankQuote> {
        let state = context.data_unchecked::<AppState>();
        state
            .aggregator
            .list_quotes(&correlation_id)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
