use crate::models::{ProductId, ProductRecord};

/// The confirmation-gated delete workflow of the product list.
///
/// ```text
/// Idle ──request──▶ Confirming ──confirm──▶ Deleting ──Ok──▶ Idle
///   ▲                 │    ▲                   │
///   └─────cancel──────┘    └───────Err─────────┘
/// ```
///
/// A failed delete returns to `Confirming` with the error attached and the
/// target retained, so the user can retry or cancel. Nothing retries on its
/// own. While `Deleting`, requests and cancellations are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteWorkflow {
    /// No deletion in progress
    #[default]
    Idle,
    /// Waiting for the user to confirm
    Confirming {
        /// The product to delete
        target: ProductRecord,
        /// Why the previous attempt failed, if it did
        error: Option<String>,
    },
    /// The delete request is outstanding
    Deleting {
        /// The product being deleted
        target: ProductRecord,
    },
}

impl DeleteWorkflow {
    /// Ask to delete `target`, clearing any previous error.
    ///
    /// Returns `false` if a delete is already outstanding.
    pub fn request(&mut self, target: ProductRecord) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = Self::Confirming {
            target,
            error: None,
        };
        true
    }

    /// Confirm the pending request, returning the id to delete.
    pub fn confirm(&mut self) -> Option<ProductId> {
        match std::mem::take(self) {
            Self::Confirming { target, .. } => {
                let id = target.id;
                *self = Self::Deleting { target };
                Some(id)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Dismiss the confirmation without deleting anything.
    ///
    /// Returns `false` if there was nothing to dismiss or a delete is outstanding.
    pub fn cancel(&mut self) -> bool {
        if matches!(self, Self::Confirming { .. }) {
            *self = Self::Idle;
            true
        } else {
            false
        }
    }

    /// Record the outcome of the outstanding delete.
    ///
    /// On success, returns the id of the deleted product so the caller can
    /// drop it from its lists.
    pub fn complete(&mut self, result: Result<(), String>) -> Option<ProductId> {
        match std::mem::take(self) {
            Self::Deleting { target } => match result {
                Ok(()) => Some(target.id),
                Err(error) => {
                    *self = Self::Confirming {
                        target,
                        error: Some(error),
                    };
                    None
                }
            },
            other => {
                *self = other;
                None
            }
        }
    }

    /// The product the workflow is about, if any.
    pub fn target(&self) -> Option<&ProductRecord> {
        match self {
            Self::Idle => None,
            Self::Confirming { target, .. } | Self::Deleting { target } => Some(target),
        }
    }

    /// The error from the last failed attempt, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Confirming { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Whether the confirmation dialog is showing.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether a delete request is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Deleting { .. })
    }
}
