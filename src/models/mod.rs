//! Entity models: row types, filter sets, and list queries.
//!
//! The dataset is strictly read-only from this layer; rows are created by
//! an external import process. Each model composes one sea-query SELECT
//! per request and maps the fetched rows into its response shape.

pub mod country;
pub mod emission;
pub mod metadata;
pub mod sector;

pub use country::{Country, CountryFilters};
pub use emission::{Emission, EmissionFilters, EmissionRow};
pub use metadata::Metadata;
pub use sector::{ParentSector, ParentSectorFilters, Sector, SectorFilters, SectorRow};
