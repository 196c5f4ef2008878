//! Repository trait implementations for the remote product service.
//!
//! This module contains the implementations of the repository traits defined
//! in `sfa-core` for the REST client.

use crate::{Error, RestCatalog};
use sfa_core::ports::Repository;

mod product;

impl Repository for RestCatalog {
    type Error = Error;
}
