//! Configuration types for the Axum HTTP server.
//!
//! This module provides configuration options for the admin panel server,
//! including network binding and the lifetime of per-browser sessions.

use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, time::Duration};

/// Configuration for the Axum HTTP server.
///
/// # Examples
///
/// ```
/// use sfa_axum::config::AxumConfig;
/// use std::time::Duration;
///
/// // Use default configuration
/// let config = AxumConfig::default();
///
/// // Custom configuration
/// let config = AxumConfig {
///     bind_address: "127.0.0.1:3000".parse().unwrap(),
///     session_ttl: Duration::from_secs(15 * 60),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AxumConfig {
    /// The address to bind the server to
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// How long an idle browser session keeps its working set
    #[serde(default = "default_session_ttl", with = "humantime_serde")]
    pub session_ttl: Duration,
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_session_ttl() -> Duration {
    Duration::from_secs(60 * 60)
}

impl Default for AxumConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            session_ttl: default_session_ttl(),
        }
    }
}
