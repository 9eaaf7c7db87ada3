//! Emissions Query API
//!
//! Read-only HTTP API over a relational dataset of greenhouse-gas
//! emissions, organized by country, sector, parent sector, and year.
//!
//! This library exposes the internals for integration testing. The main
//! entry point for running the server is the `emissions-api` binary.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod query;
pub mod routes;
pub mod state;
