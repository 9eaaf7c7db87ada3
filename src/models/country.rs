//! Country model.

use sea_query::{Expr, ExprTrait, PostgresQueryBuilder, Query};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::query::{Countries, ListParams};

/// A country, identified by its unique code.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Country {
    pub id: i32,
    pub code: String,
    pub name: Option<String>,
}

/// Equality filters for country listings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CountryFilters {
    pub id: Option<i32>,
    pub code: Option<String>,
    pub name: Option<String>,
}

/// Sortable country columns. Anything else falls back to default order.
fn sort_column(name: &str) -> Option<Countries> {
    match name {
        "id" => Some(Countries::Id),
        "code" => Some(Countries::Code),
        "name" => Some(Countries::Name),
        _ => None,
    }
}

impl Country {
    /// Compose the list SELECT for the given filters and paging.
    pub fn list_sql(filters: &CountryFilters, params: &ListParams) -> String {
        let mut query = Query::select();
        query
            .columns([Countries::Id, Countries::Code, Countries::Name])
            .from(Countries::Table);

        if let Some(id) = filters.id {
            query.and_where(Expr::col(Countries::Id).eq(id));
        }
        if let Some(code) = &filters.code {
            query.and_where(Expr::col(Countries::Code).eq(code.as_str()));
        }
        if let Some(name) = &filters.name {
            query.and_where(Expr::col(Countries::Name).eq(name.as_str()));
        }

        if let Some(col) = sort_column(&params.sort_by) {
            query.order_by(col, params.direction());
        }
        params.apply_paging(&mut query);

        query.to_string(PostgresQueryBuilder)
    }

    /// List countries matching the filters.
    pub async fn list(
        pool: &PgPool,
        filters: &CountryFilters,
        params: &ListParams,
    ) -> Result<Vec<Country>, sqlx::Error> {
        let sql = Self::list_sql(filters, params);
        sqlx::query_as::<_, Country>(&sql).fetch_all(pool).await
    }
}
