//! Request-to-query translation.
//!
//! Shared list parameters (pagination and sort) plus the sea-query table
//! identifiers for the four entities. The per-entity filter sets and query
//! composition live with their models.

pub mod params;
pub mod schema;

pub use params::ListParams;
pub use schema::{Countries, Emissions, ParentSectors, Sectors};
