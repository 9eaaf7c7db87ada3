//! Sector models: parent sectors and sectors.
//!
//! A sector optionally belongs to a parent sector (the FK is nullable), so
//! sector listings LEFT JOIN `parent_sectors` and map the parent into the
//! response when present — never a fabricated object when it is not.

use sea_query::{Alias, Expr, ExprTrait, PostgresQueryBuilder, Query};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::query::{ListParams, ParentSectors, Sectors};

/// A top-level grouping category for sectors (e.g., "Energy").
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ParentSector {
    pub id: i32,
    pub name: Option<String>,
}

/// Equality filters for parent sector listings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ParentSectorFilters {
    pub id: Option<i32>,
    pub name: Option<String>,
}

fn parent_sort_column(name: &str) -> Option<ParentSectors> {
    match name {
        "id" => Some(ParentSectors::Id),
        "name" => Some(ParentSectors::Name),
        _ => None,
    }
}

impl ParentSector {
    /// Compose the list SELECT for the given filters and paging.
    pub fn list_sql(filters: &ParentSectorFilters, params: &ListParams) -> String {
        let mut query = Query::select();
        query
            .columns([ParentSectors::Id, ParentSectors::Name])
            .from(ParentSectors::Table);

        if let Some(id) = filters.id {
            query.and_where(Expr::col(ParentSectors::Id).eq(id));
        }
        if let Some(name) = &filters.name {
            query.and_where(Expr::col(ParentSectors::Name).eq(name.as_str()));
        }

        if let Some(col) = parent_sort_column(&params.sort_by) {
            query.order_by(col, params.direction());
        }
        params.apply_paging(&mut query);

        query.to_string(PostgresQueryBuilder)
    }

    /// List parent sectors matching the filters.
    pub async fn list(
        pool: &PgPool,
        filters: &ParentSectorFilters,
        params: &ListParams,
    ) -> Result<Vec<ParentSector>, sqlx::Error> {
        let sql = Self::list_sql(filters, params);
        sqlx::query_as::<_, ParentSector>(&sql)
            .fetch_all(pool)
            .await
    }
}

/// Flat row fetched by the sector list query (sector + joined parent).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SectorRow {
    pub id: i32,
    pub name: String,
    pub parent_sector_id: Option<i32>,
    pub parent_sector_name: Option<String>,
}

/// A sector with its optional parent sector.
#[derive(Debug, Clone, Serialize)]
pub struct Sector {
    pub id: i32,
    pub name: String,
    /// Always present in the response shape; null for orphan sectors.
    pub parent_sector: Option<ParentSector>,
}

impl From<SectorRow> for Sector {
    fn from(row: SectorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            parent_sector: row.parent_sector_id.map(|id| ParentSector {
                id,
                name: row.parent_sector_name,
            }),
        }
    }
}

/// Equality filters for sector listings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SectorFilters {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub parent_sector_id: Option<i32>,
}

fn sector_sort_column(name: &str) -> Option<Sectors> {
    match name {
        "id" => Some(Sectors::Id),
        "name" => Some(Sectors::Name),
        _ => None,
    }
}

impl Sector {
    /// Compose the list SELECT for the given filters and paging.
    ///
    /// Joined parent columns are selected up front so mapping never issues
    /// follow-up queries.
    pub fn list_sql(filters: &SectorFilters, params: &ListParams) -> String {
        let mut query = Query::select();
        query
            .column((Sectors::Table, Sectors::Id))
            .column((Sectors::Table, Sectors::Name))
            .column((Sectors::Table, Sectors::ParentSectorId))
            .expr_as(
                Expr::col((ParentSectors::Table, ParentSectors::Name)),
                Alias::new("parent_sector_name"),
            )
            .from(Sectors::Table)
            .left_join(
                ParentSectors::Table,
                Expr::col((Sectors::Table, Sectors::ParentSectorId))
                    .equals((ParentSectors::Table, ParentSectors::Id)),
            );

        if let Some(id) = filters.id {
            query.and_where(Expr::col((Sectors::Table, Sectors::Id)).eq(id));
        }
        if let Some(name) = &filters.name {
            query.and_where(Expr::col((Sectors::Table, Sectors::Name)).eq(name.as_str()));
        }
        if let Some(parent_sector_id) = filters.parent_sector_id {
            query.and_where(
                Expr::col((Sectors::Table, Sectors::ParentSectorId)).eq(parent_sector_id),
            );
        }

        if let Some(col) = sector_sort_column(&params.sort_by) {
            query.order_by((Sectors::Table, col), params.direction());
        }
        params.apply_paging(&mut query);

        query.to_string(PostgresQueryBuilder)
    }

    /// List sectors matching the filters, parents eagerly joined.
    pub async fn list(
        pool: &PgPool,
        filters: &SectorFilters,
        params: &ListParams,
    ) -> Result<Vec<Sector>, sqlx::Error> {
        let sql = Self::list_sql(filters, params);
        let rows = sqlx::query_as::<_, SectorRow>(&sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Sector::from).collect())
    }
}
