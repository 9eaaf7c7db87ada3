//! Dataset metadata aggregation.

use serde::Serialize;
use sqlx::PgPool;

/// Summary counts across the dataset, plus the most recent emission year.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub countries_count: i64,
    pub parent_sectors_count: i64,
    pub sectors_count: i64,
    pub emissions_count: i64,
    /// Null when no emissions exist.
    pub latest_year_in_emissions: Option<i32>,
}

impl Metadata {
    /// Collect the aggregate counts. Each count is an independent
    /// full-table count; nothing is sampled or cached.
    pub async fn collect(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let countries_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM countries")
            .fetch_one(pool)
            .await?;
        let parent_sectors_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM parent_sectors")
            .fetch_one(pool)
            .await?;
        let sectors_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sectors")
            .fetch_one(pool)
            .await?;
        let emissions_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM emissions")
            .fetch_one(pool)
            .await?;
        let latest_year_in_emissions: Option<i32> =
            sqlx::query_scalar("SELECT MAX(year) FROM emissions")
                .fetch_one(pool)
                .await?;

        Ok(Self {
            countries_count,
            parent_sectors_count,
            sectors_count,
            emissions_count,
            latest_year_in_emissions,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_exact_keys() {
        let metadata = Metadata {
            countries_count: 2,
            parent_sectors_count: 1,
            sectors_count: 1,
            emissions_count: 1,
            latest_year_in_emissions: Some(2000),
        };
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "countries_count": 2,
                "parent_sectors_count": 1,
                "sectors_count": 1,
                "emissions_count": 1,
                "latest_year_in_emissions": 2000
            })
        );
    }

    #[test]
    fn latest_year_is_null_when_no_emissions() {
        let metadata = Metadata {
            countries_count: 0,
            parent_sectors_count: 0,
            sectors_count: 0,
            emissions_count: 0,
            latest_year_in_emissions: None,
        };
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["latest_year_in_emissions"], serde_json::Value::Null);
    }
}
