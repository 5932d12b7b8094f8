use axum::{
    Extension, Router,
    routing::{delete, get, post},
};

use crate::modules::quotes::use_cases::list_quotes_by_correlation_id::inbound::http as list_http;
use crate::modules::quotes::use_cases::receive_bank_quote::inbound::http as receive_http;
use crate::modules::quotes::use_cases::reset_quotes::inbound::http as reset_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

/// `DELETE /quotes` is only mounted when `enable_reset` is set.
pub fn router(state: AppState, enable_reset: bool) -> Router {
    let mut router = Router::new()
        .route("/", post(receive_http::handle))
        .route("/quotes/{correlation_id}", get(list_http::handle))
        .route(
            graphql::GRAPHQL_PATH,
            get(graphql::graphiql).post(graphql::handle),
        );

    if enable_reset {
        router = router.route("/quotes", delete(reset_http::handle));
    }

    router
        .layer(Extension(graphql::schema(state.clone())))
        .with_state(state)
}
