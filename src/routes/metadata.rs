//! Dataset metadata endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppResult;
use crate::models::Metadata;
use crate::state::AppState;

/// Summary counts and the most recent emission year.
async fn get_metadata(State(state): State<AppState>) -> AppResult<Json<Metadata>> {
    let metadata = Metadata::collect(state.db()).await?;
    Ok(Json(metadata))
}

/// Create the metadata router.
pub fn router() -> Router<AppState> {
    Router::new().route("/metadata", get(get_metadata))
}
