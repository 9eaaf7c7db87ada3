//! Country listing endpoint.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppResult;
use crate::models::{Country, CountryFilters};
use crate::query::ListParams;
use crate::state::AppState;

/// List countries with optional filtering by id, code, or name.
async fn list_countries(
    State(state): State<AppState>,
    Query(filters): Query<CountryFilters>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Country>>> {
    let countries = Country::list(state.db(), &filters, &params).await?;
    Ok(Json(countries))
}

/// Create the country router.
pub fn router() -> Router<AppState> {
    Router::new().route("/countries", get(list_countries))
}
