#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the sfa-core crate.
//! [sfa_core]: https://docs.rs/sfa_core/latest/sfa_core/index.html
//! [sfa_axum]: https://docs.rs/sfa_axum/latest/sfa_axum/index.html
//! [sfa_rest]: https://docs.rs/sfa_rest/latest/sfa_rest/index.html
#![doc = include_str!("../README.md")]

/// Core domain models for the admin panel.
///
/// The models are plain data structures mirroring what the remote product
/// service exchanges, plus the small amount of presentation-independent logic
/// that goes with them (category extraction, form coercion, load results).
pub mod models;

/// Interface traits for the admin panel.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
/// The admin panel owns no data: every read and write goes through the
/// `ProductRepository` port, which an adapter implements against the remote
/// product service.
pub mod ports;

/// The product list view-model.
///
/// View parameters are an explicit, immutable `ListQuery`; the filtered and
/// sorted view is always derived from it by a pure function. The `ProductList`
/// working set and its delete workflow build on top of that.
pub mod view;
