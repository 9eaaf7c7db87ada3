//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::Result;
use sqlx::PgPool;

use crate::config::Config;
use crate::db;
use crate::middleware::RateLimiter;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// PostgreSQL connection pool.
    db: PgPool,

    /// Global per-client rate limiter.
    rate_limiter: RateLimiter,
}

impl AppState {
    /// Initialize application state from configuration.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = db::create_pool(config).await?;
        let rate_limiter = RateLimiter::new(config.rate_limit_per_minute);

        Ok(Self::from_parts(db, rate_limiter))
    }

    /// Assemble state from already-constructed parts.
    ///
    /// Used by integration tests to inject a lazy pool.
    pub fn from_parts(db: PgPool, rate_limiter: RateLimiter) -> Self {
        Self {
            inner: Arc::new(AppStateInner { db, rate_limiter }),
        }
    }

    /// The PostgreSQL connection pool.
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// The global rate limiter.
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.inner.rate_limiter
    }
}
