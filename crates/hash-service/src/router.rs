//! Route table

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handler::{hash_handler, redirect_to_hash, HASH_PATH};

/// Build the service router.
///
/// `/` and every unmatched path redirect to `/hash`, so callers always land
/// on the usage page rather than a 404.
pub fn app() -> Router {
    Router::new()
        .route(HASH_PATH, get(hash_handler))
        .route("/", get(redirect_to_hash))
        .fallback(redirect_to_hash)
        .layer(TraceLayer::new_for_http())
}
