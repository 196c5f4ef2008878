mod product;

pub use product::ProductRepository;

/// The base trait for every repository port.
///
/// Adapters pick their own error type; the panel only ever displays it.
pub trait Repository {
    /// The error returned by failed operations
    type Error: std::error::Error + Send + Sync + 'static;
}
