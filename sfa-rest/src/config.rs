//! Configuration types for the remote product service connection.
//!
//! This module provides configuration options for reaching the REST service
//! that owns the product data.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the remote product service.
///
/// # Examples
///
/// ```
/// use sfa_rest::config::RestConfig;
/// use std::time::Duration;
///
/// // The public demo service, no timeout (default)
/// let config = RestConfig::default();
///
/// // A local mirror that must answer within five seconds
/// let config = RestConfig {
///     base_url: "http://localhost:3000".to_string(),
///     timeout: Some(Duration::from_secs(5)),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RestConfig {
    /// The base URL the `/products` endpoints live under
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How long to wait for a response. If None, requests wait indefinitely
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

fn default_base_url() -> String {
    "https://fakestoreapi.com".to_string()
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
        }
    }
}
