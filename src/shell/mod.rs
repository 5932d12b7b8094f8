// Composition root for the quotes aggregator.
//
// - Read config from environment.
// - Instantiate the in-memory quote store.
// - Wire the aggregation service into the HTTP and GraphQL adapters.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
