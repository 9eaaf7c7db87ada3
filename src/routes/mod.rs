//! HTTP routes.

pub mod country;
pub mod emission;
pub mod health;
pub mod metadata;
pub mod sector;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::SizeAbove;
use tower_http::trace::TraceLayer;

use crate::middleware;
use crate::state::AppState;

/// Response bodies below this size are served uncompressed.
const COMPRESSION_MIN_BYTES: u16 = 10_000;

/// Assemble the full application router with middleware.
///
/// Layer order (last added = first executed in request flow):
/// TraceLayer → compression → rate limit → routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(country::router())
        .merge(sector::router())
        .merge(emission::router())
        .merge(metadata::router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::enforce_rate_limit,
        ))
        .layer(CompressionLayer::new().compress_when(SizeAbove::new(COMPRESSION_MIN_BYTES)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
