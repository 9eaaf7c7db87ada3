//! Parent sector and sector listing endpoints.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppResult;
use crate::models::{ParentSector, ParentSectorFilters, Sector, SectorFilters};
use crate::query::ListParams;
use crate::state::AppState;

/// List parent sectors with optional filtering by id or name.
async fn list_parent_sectors(
    State(state): State<AppState>,
    Query(filters): Query<ParentSectorFilters>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<ParentSector>>> {
    let parent_sectors = ParentSector::list(state.db(), &filters, &params).await?;
    Ok(Json(parent_sectors))
}

/// List sectors with optional filtering by id, name, or parent_sector_id.
async fn list_sectors(
    State(state): State<AppState>,
    Query(filters): Query<SectorFilters>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Sector>>> {
    let sectors = Sector::list(state.db(), &filters, &params).await?;
    Ok(Json(sectors))
}

/// Create the sector router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parent-sectors", get(list_parent_sectors))
        .route("/sectors", get(list_sectors))
}
