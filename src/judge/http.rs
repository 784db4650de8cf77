//! Shared HTTP client module
//!
//! Provides a global, lazy-initialized HTTP client with connection
//! pooling, reused across all analysis calls.

use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// Global HTTP client for analysis service calls
///
/// Configuration sized for slow, model-backed analysis requests:
/// - 120s timeout (a single evaluation can take tens of seconds)
/// - idle connections kept warm so batch submissions reuse sockets
static ANALYSIS_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .tcp_nodelay(true)
        .build()
        .expect("Failed to create analysis HTTP client")
});

/// Get the global analysis HTTP client
///
/// The client is created on first access and reused for all subsequent
/// calls.
#[inline]
pub fn analysis_client() -> &'static Client {
    &ANALYSIS_CLIENT
}
