use std::fmt::Display;

/// The message shown when a requested product does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

/// The outcome of a page's one read against the remote service.
///
/// Loaders never fail outright: a missing record and a failed request are
/// page states like any other, rendered instead of the page's content.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    /// The data the page needs
    Ready(T),
    /// The requested record does not exist
    NotFound,
    /// The request failed; carries the error text
    Failed(String),
}

impl<T> Loaded<T> {
    /// Classify the result of a single-record read, where `Ok(None)` means
    /// the record does not exist.
    pub fn from_lookup<E: Display>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(value)) => Self::Ready(value),
            Ok(None) => Self::NotFound,
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// Classify the result of a read that cannot come back empty.
    pub fn from_fetch<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// The message to show in place of the page, if the load did not succeed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::NotFound => Some(NOT_FOUND_MESSAGE),
            Self::Failed(message) => Some(message),
        }
    }

    /// Transform the loaded value, keeping failures as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loaded<U> {
        match self {
            Self::Ready(value) => Loaded::Ready(f(value)),
            Self::NotFound => Loaded::NotFound,
            Self::Failed(message) => Loaded::Failed(message),
        }
    }
}
