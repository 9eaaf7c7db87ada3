//! List parameters shared by every list endpoint.
//!
//! `limit`/`offset`/`sort_by`/`order` deserialize straight from the query
//! string; each endpoint pairs them with its own filter set. Sort fields
//! resolve through an explicit per-entity whitelist, so these parameters
//! only carry the requested name and direction.

use sea_query::{Order, SelectStatement};
use serde::Deserialize;

/// Sentinel limit meaning "return all remaining rows".
///
/// Unbounded by design: no upper bound is enforced anywhere, which is a
/// known resource-exhaustion risk carried over from the query contract.
pub const UNLIMITED: i64 = -1;

fn default_limit() -> i64 {
    50
}

fn default_offset() -> i64 {
    0
}

fn default_sort_by() -> String {
    "id".to_string()
}

fn default_order() -> String {
    "asc".to_string()
}

/// Pagination and sort parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    /// Maximum rows to return (default: 50; `-1` means no limit).
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Rows to skip before returning results (default: 0).
    #[serde(default = "default_offset")]
    pub offset: i64,

    /// Requested sort field (default: "id"); validated per entity.
    #[serde(default = "default_sort_by")]
    pub sort_by: String,

    /// Sort direction: "desc" for descending, anything else ascending.
    #[serde(default = "default_order")]
    pub order: String,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: default_offset(),
            sort_by: default_sort_by(),
            order: default_order(),
        }
    }
}

impl ListParams {
    /// Sort direction as a sea-query ordering.
    pub fn direction(&self) -> Order {
        if self.order == "desc" {
            Order::Desc
        } else {
            Order::Asc
        }
    }

    /// Apply offset and limit to a select statement.
    ///
    /// `limit == -1` applies the offset only and leaves the query
    /// unbounded. Other negative values clamp to zero.
    pub fn apply_paging(&self, query: &mut SelectStatement) {
        query.offset(self.offset.max(0) as u64);
        if self.limit != UNLIMITED {
            query.limit(self.limit.max(0) as u64);
        }
    }
}
