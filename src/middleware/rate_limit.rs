//! Global per-client rate limiting.
//!
//! Fixed 60-second window counted in process memory, keyed by client IP.
//! Every endpoint is subject to the same limit; violations return 429 with
//! a fixed JSON body.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use dashmap::DashMap;
use tracing::debug;

use crate::state::AppState;

/// Counting window duration.
const WINDOW: Duration = Duration::from_secs(60);

/// Per-client request counter for the current window.
#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

/// In-memory fixed-window rate limiter.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<RateLimiterInner>,
}

struct RateLimiterInner {
    max_per_window: u32,
    windows: DashMap<String, Window>,
}

impl RateLimiter {
    /// Create a rate limiter allowing `max_per_window` requests per minute.
    pub fn new(max_per_window: u32) -> Self {
        Self {
            inner: Arc::new(RateLimiterInner {
                max_per_window,
                windows: DashMap::new(),
            }),
        }
    }

    /// Check whether a request from `client` is allowed.
    ///
    /// Returns Ok(()) if allowed, Err with retry-after seconds if limited.
    pub fn check(&self, client: &str) -> Result<(), u64> {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: &str, now: Instant) -> Result<(), u64> {
        let mut entry = self
            .inner
            .windows
            .entry(client.to_string())
            .or_insert_with(|| Window {
                started: now,
                count: 0,
            });

        if now.duration_since(entry.started) >= WINDOW {
            entry.started = now;
            entry.count = 0;
        }

        entry.count += 1;

        if entry.count > self.inner.max_per_window {
            let remaining = WINDOW - now.duration_since(entry.started);
            Err(remaining.as_secs().max(1))
        } else {
            Ok(())
        }
    }

    /// Drop windows that have expired, so idle clients do not accumulate.
    pub fn sweep(&self) {
        let now = Instant::now();
        self.inner
            .windows
            .retain(|_, window| now.duration_since(window.started) < WINDOW);
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("max_per_window", &self.inner.max_per_window)
            .finish()
    }
}

/// Get the client identifier (IP address) for rate limiting.
pub fn client_id(addr: Option<SocketAddr>, headers: &HeaderMap) -> String {
    // Check X-Forwarded-For header first (for proxied requests)
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(value) = forwarded.to_str()
    {
        // Take the first IP in the chain
        if let Some(ip) = value.split(',').next() {
            return ip.trim().to_string();
        }
    }

    // Check X-Real-IP header
    if let Some(real_ip) = headers.get("x-real-ip")
        && let Ok(value) = real_ip.to_str()
    {
        return value.to_string();
    }

    // Fall back to connection address
    addr.map(|a| a.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware enforcing the global per-client rate limit.
pub async fn enforce_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0);
    let client = client_id(addr, request.headers());

    match state.rate_limiter().check(&client) {
        Ok(()) => next.run(request).await,
        Err(retry_after) => {
            debug!(client = %client, "rate limit exceeded");
            rate_limit_response(retry_after)
        }
    }
}

/// Rate limit exceeded response.
fn rate_limit_response(retry_after: u64) -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        [
            ("retry-after", retry_after.to_string()),
            ("content-type", "application/json".to_string()),
        ],
        r#"{"detail": "Rate limit exceeded. Please try again later."}"#,
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_limit_then_blocks() {
        let limiter = RateLimiter::new(3);
        let now = Instant::now();

        for _ in 0..3 {
            assert!(limiter.check_at("1.2.3.4", now).is_ok());
        }
        let retry_after = limiter.check_at("1.2.3.4", now).unwrap_err();
        assert!(retry_after >= 1);
    }

    #[test]
    fn clients_are_counted_independently() {
        let limiter = RateLimiter::new(1);
        let now = Instant::now();

        assert!(limiter.check_at("1.1.1.1", now).is_ok());
        assert!(limiter.check_at("2.2.2.2", now).is_ok());
        assert!(limiter.check_at("1.1.1.1", now).is_err());
    }

    #[test]
    fn window_resets_after_expiry() {
        let limiter = RateLimiter::new(1);
        let start = Instant::now();

        assert!(limiter.check_at("1.2.3.4", start).is_ok());
        assert!(limiter.check_at("1.2.3.4", start).is_err());

        let later = start + Duration::from_secs(61);
        assert!(limiter.check_at("1.2.3.4", later).is_ok());
    }

    #[test]
    fn sweep_drops_only_expired_windows() {
        let limiter = RateLimiter::new(1);
        let old = Instant::now() - Duration::from_secs(120);

        assert!(limiter.check_at("stale", old).is_ok());
        assert!(limiter.check_at("fresh", Instant::now()).is_ok());

        limiter.sweep();
        assert!(!limiter.inner.windows.contains_key("stale"));
        assert!(limiter.inner.windows.contains_key("fresh"));
    }

    #[test]
    fn client_id_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "1.2.3.4, 5.6.7.8".parse().unwrap());
        headers.insert("x-real-ip", "9.9.9.9".parse().unwrap());

        assert_eq!(client_id(None, &headers), "1.2.3.4");
    }

    #[test]
    fn client_id_falls_back_to_real_ip_then_addr() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", "9.9.9.9".parse().unwrap());
        assert_eq!(client_id(None, &headers), "9.9.9.9");

        let headers = HeaderMap::new();
        let addr: SocketAddr = "10.0.0.1:1234".parse().unwrap();
        assert_eq!(client_id(Some(addr), &headers), "10.0.0.1");
        assert_eq!(client_id(None, &headers), "unknown");
    }
}
