//! Emission model.
//!
//! Emission listings join countries and sectors (inner) and parent
//! sectors (left, since a sector's parent may be absent) in one composed
//! query, so the nested response is built from a single fetched row.

use sea_query::{Alias, Expr, ExprTrait, PostgresQueryBuilder, Query};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::models::{Country, ParentSector, Sector};
use crate::query::{Countries, Emissions, ListParams, ParentSectors, Sectors};

/// Flat row fetched by the emission list query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmissionRow {
    pub id: i32,
    pub year: i32,
    pub emissions: f64,
    pub country_id: Option<i32>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub sector_id: Option<i32>,
    pub sector_name: Option<String>,
    pub parent_sector_id: Option<i32>,
    pub parent_sector_name: Option<String>,
}

/// An emission record with its related entities.
#[derive(Debug, Clone, Serialize)]
pub struct Emission {
    pub id: i32,
    pub year: i32,
    pub emissions: f64,
    pub country: Option<Country>,
    pub sector: Option<Sector>,
}

impl From<EmissionRow> for Emission {
    fn from(row: EmissionRow) -> Self {
        Self {
            id: row.id,
            year: row.year,
            emissions: row.emissions,
            country: row.country_id.map(|id| Country {
                id,
                code: row.country_code.unwrap_or_default(),
                name: row.country_name,
            }),
            sector: row.sector_id.map(|id| Sector {
                id,
                name: row.sector_name.unwrap_or_default(),
                parent_sector: row.parent_sector_id.map(|id| ParentSector {
                    id,
                    name: row.parent_sector_name,
                }),
            }),
        }
    }
}

/// Equality filters for emission listings, including filters on the
/// joined country, sector, and parent sector.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct EmissionFilters {
    pub country_id: Option<i32>,
    pub sector_id: Option<i32>,
    pub year: Option<i32>,
    pub emissions: Option<f64>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub sector_name: Option<String>,
    pub parent_sector_name: Option<String>,
}

fn sort_column(name: &str) -> Option<Emissions> {
    match name {
        "id" => Some(Emissions::Id),
        "year" => Some(Emissions::Year),
        "emissions" => Some(Emissions::Emissions),
        _ => None,
    }
}

impl Emission {
    /// Compose the list SELECT for the given filters and paging.
    pub fn list_sql(filters: &EmissionFilters, params: &ListParams) -> String {
        let mut query = Query::select();
        query
            .column((Emissions::Table, Emissions::Id))
            .column((Emissions::Table, Emissions::Year))
            .column((Emissions::Table, Emissions::Emissions))
            .expr_as(
                Expr::col((Countries::Table, Countries::Id)),
                Alias::new("country_id"),
            )
            .expr_as(
                Expr::col((Countries::Table, Countries::Code)),
                Alias::new("country_code"),
            )
            .expr_as(
                Expr::col((Countries::Table, Countries::Name)),
                Alias::new("country_name"),
            )
            .expr_as(
                Expr::col((Sectors::Table, Sectors::Id)),
                Alias::new("sector_id"),
            )
            .expr_as(
                Expr::col((Sectors::Table, Sectors::Name)),
                Alias::new("sector_name"),
            )
            .expr_as(
                Expr::col((ParentSectors::Table, ParentSectors::Id)),
                Alias::new("parent_sector_id"),
            )
            .expr_as(
                Expr::col((ParentSectors::Table, ParentSectors::Name)),
                Alias::new("parent_sector_name"),
            )
            .from(Emissions::Table)
            .inner_join(
                Countries::Table,
                Expr::col((Emissions::Table, Emissions::CountryId))
                    .equals((Countries::Table, Countries::Id)),
            )
            .inner_join(
                Sectors::Table,
                Expr::col((Emissions::Table, Emissions::SectorId))
                    .equals((Sectors::Table, Sectors::Id)),
            )
            .left_join(
                ParentSectors::Table,
                Expr::col((Sectors::Table, Sectors::ParentSectorId))
                    .equals((ParentSectors::Table, ParentSectors::Id)),
            );

        if let Some(country_id) = filters.country_id {
            query.and_where(Expr::col((Emissions::Table, Emissions::CountryId)).eq(country_id));
        }
        if let Some(sector_id) = filters.sector_id {
            query.and_where(Expr::col((Emissions::Table, Emissions::SectorId)).eq(sector_id));
        }
        if let Some(year) = filters.year {
            query.and_where(Expr::col((Emissions::Table, Emissions::Year)).eq(year));
        }
        if let Some(emissions) = filters.emissions {
            query.and_where(Expr::col((Emissions::Table, Emissions::Emissions)).eq(emissions));
        }
        if let Some(country_code) = &filters.country_code {
            // Codes are stored uppercase; normalize before comparing.
            query.and_where(
                Expr::col((Countries::Table, Countries::Code)).eq(country_code.to_uppercase()),
            );
        }
        if let Some(country_name) = &filters.country_name {
            query
                .and_where(Expr::col((Countries::Table, Countries::Name)).eq(country_name.as_str()));
        }
        if let Some(sector_name) = &filters.sector_name {
            query.and_where(Expr::col((Sectors::Table, Sectors::Name)).eq(sector_name.as_str()));
        }
        if let Some(parent_sector_name) = &filters.parent_sector_name {
            query.and_where(
                Expr::col((ParentSectors::Table, ParentSectors::Name))
                    .eq(parent_sector_name.as_str()),
            );
        }

        if let Some(col) = sort_column(&params.sort_by) {
            query.order_by((Emissions::Table, col), params.direction());
        }
        params.apply_paging(&mut query);

        query.to_string(PostgresQueryBuilder)
    }

    /// List emissions matching the filters, relations eagerly joined.
    pub async fn list(
        pool: &PgPool,
        filters: &EmissionFilters,
        params: &ListParams,
    ) -> Result<Vec<Emission>, sqlx::Error> {
        let sql = Self::list_sql(filters, params);
        let rows = sqlx::query_as::<_, EmissionRow>(&sql)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Emission::from).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn list_joins_relations_once() {
        let sql = Emission::list_sql(&EmissionFilters::default(), &ListParams::default());
        assert!(sql.contains(
            r#"INNER JOIN "countries" ON "emissions"."country_id" = "countries"."id""#
        ));
        assert!(
            sql.contains(r#"INNER JOIN "sectors" ON "emissions"."sector_id" = "sectors"."id""#)
        );
        assert!(sql.contains(
            r#"LEFT JOIN "parent_sectors" ON "sectors"."parent_sector_id" = "parent_sectors"."id""#
        ));
        assert!(sql.ends_with("LIMIT 50 OFFSET 0"));
    }

    #[test]
    fn joined_columns_are_aliased_for_mapping() {
        let sql = Emission::list_sql(&EmissionFilters::default(), &ListParams::default());
        assert!(sql.contains(r#""countries"."id" AS "country_id""#));
        assert!(sql.contains(r#""countries"."code" AS "country_code""#));
        assert!(sql.contains(r#""sectors"."name" AS "sector_name""#));
        assert!(sql.contains(r#""parent_sectors"."name" AS "parent_sector_name""#));
    }

    #[test]
    fn filters_compose_with_and() {
        let filters = EmissionFilters {
            country_id: Some(1),
            year: Some(2000),
            emissions: Some(123.4),
            sector_name: Some("Power".to_string()),
            parent_sector_name: Some("Energy".to_string()),
            ..EmissionFilters::default()
        };
        let sql = Emission::list_sql(&filters, &ListParams::default());
        assert!(sql.contains(r#""emissions"."country_id" = 1"#));
        assert!(sql.contains(r#"AND "emissions"."year" = 2000"#));
        assert!(sql.contains(r#"AND "emissions"."emissions" = 123.4"#));
        assert!(sql.contains(r#"AND "sectors"."name" = 'Power'"#));
        assert!(sql.contains(r#"AND "parent_sectors"."name" = 'Energy'"#));
    }

    #[test]
    fn country_code_filter_is_uppercased() {
        let filters = EmissionFilters {
            country_code: Some("us".to_string()),
            ..EmissionFilters::default()
        };
        let sql = Emission::list_sql(&filters, &ListParams::default());
        assert!(sql.contains(r#""countries"."code" = 'US'"#));
    }

    #[test]
    fn sort_whitelist_limited_to_emission_columns() {
        let params = ListParams {
            sort_by: "year".to_string(),
            order: "desc".to_string(),
            ..ListParams::default()
        };
        let sql = Emission::list_sql(&EmissionFilters::default(), &params);
        assert!(sql.contains(r#"ORDER BY "emissions"."year" DESC"#));

        let params = ListParams {
            sort_by: "country_code".to_string(),
            ..ListParams::default()
        };
        let sql = Emission::list_sql(&EmissionFilters::default(), &params);
        assert!(!sql.contains("ORDER BY"));
    }

    #[test]
    fn row_maps_to_nested_response() {
        let row = EmissionRow {
            id: 1,
            year: 2000,
            emissions: 123.4,
            country_id: Some(1),
            country_code: Some("US".to_string()),
            country_name: Some("United States".to_string()),
            sector_id: Some(1),
            sector_name: Some("Power".to_string()),
            parent_sector_id: Some(1),
            parent_sector_name: Some("Energy".to_string()),
        };
        let value = serde_json::to_value(Emission::from(row)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "year": 2000,
                "emissions": 123.4,
                "country": {"id": 1, "code": "US", "name": "United States"},
                "sector": {
                    "id": 1,
                    "name": "Power",
                    "parent_sector": {"id": 1, "name": "Energy"}
                }
            })
        );
    }

    #[test]
    fn absent_relations_map_to_null_not_defaults() {
        let row = EmissionRow {
            id: 2,
            year: 2001,
            emissions: 0.5,
            country_id: None,
            country_code: None,
            country_name: None,
            sector_id: Some(3),
            sector_name: Some("Waste".to_string()),
            parent_sector_id: None,
            parent_sector_name: None,
        };
        let value = serde_json::to_value(Emission::from(row)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 2,
                "year": 2001,
                "emissions": 0.5,
                "country": null,
                "sector": {"id": 3, "name": "Waste", "parent_sector": null}
            })
        );
    }
}
