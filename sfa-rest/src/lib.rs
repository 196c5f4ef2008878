#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the sfa-rest crate.
//! [sfa_core]: https://docs.rs/sfa_core/latest/sfa_core/index.html
//! [sfa_axum]: https://docs.rs/sfa_axum/latest/sfa_axum/index.html
//! [sfa_rest]: https://docs.rs/sfa_rest/latest/sfa_rest/index.html
#![doc = include_str!("../README.md")]

use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod config;
mod r#impl;

use config::RestConfig;

/// The ways a request to the remote product service can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured base URL could not be parsed
    #[error("invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    /// The service answered with a non-success status
    #[error("API error: {}", .0.as_u16())]
    Status(StatusCode),

    /// The request could not be completed
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with something other than the expected JSON
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the remote product service.
///
/// Cloning is cheap: clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// # use sfa_rest::{RestCatalog, config::RestConfig};
/// # use sfa_core::ports::ProductRepository as _;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = RestCatalog::open(&RestConfig::default())?;
/// let products = catalog.list_products().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct RestCatalog {
    client: reqwest::Client,
    base_url: Url,
}

impl RestCatalog {
    /// Build a client for the service described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Url` if the base URL is invalid, or
    /// `Error::Transport` if the HTTP client cannot be initialized.
    pub fn open(config: &RestConfig) -> Result<Self, Error> {
        let mut base_url = Url::parse(&config.base_url)?;

        // Without the trailing slash, joining would replace the last segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// The normalized base URL requests are made against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }
}

/// Turn non-success statuses into errors.
fn check(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Status(status))
    }
}

/// Read and decode a JSON body.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Read and decode a JSON body that may legitimately be empty or `null`.
async fn read_optional_json<T: DeserializeOwned>(response: Response) -> Result<Option<T>, Error> {
    let body = response.bytes().await?;
    if body.iter().all(u8::is_ascii_whitespace) {
        Ok(None)
    } else {
        Ok(serde_json::from_slice(&body)?)
    }
}
