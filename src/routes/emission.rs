//! Emission listing endpoint.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppResult;
use crate::models::{Emission, EmissionFilters};
use crate::query::ListParams;
use crate::state::AppState;

/// List emissions with flexible filtering on the emission row and its
/// joined country, sector, and parent sector. All filters combine with
/// AND logic.
async fn list_emissions(
    State(state): State<AppState>,
    Query(filters): Query<EmissionFilters>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Emission>>> {
    let emissions = Emission::list(state.db(), &filters, &params).await?;
    Ok(Json(emissions))
}

/// Create the emission router.
pub fn router() -> Router<AppState> {
    Router::new().route("/emissions", get(list_emissions))
}
