//! Table and column identifiers for query building.

use sea_query::Iden;

/// `countries` table.
#[derive(Iden, Clone, Copy)]
pub enum Countries {
    Table,
    Id,
    Code,
    Name,
}

/// `parent_sectors` table.
#[derive(Iden, Clone, Copy)]
pub enum ParentSectors {
    Table,
    Id,
    Name,
}

/// `sectors` table.
#[derive(Iden, Clone, Copy)]
pub enum Sectors {
    Table,
    Id,
    Name,
    ParentSectorId,
}

/// `emissions` table.
#[derive(Iden, Clone, Copy)]
pub enum Emissions {
    Table,
    Id,
    CountryId,
    SectorId,
    Year,
    Emissions,
}
