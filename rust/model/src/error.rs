// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types shared across the envelope pipeline.
//!
//! Only pipeline-fatal conditions become errors. Degenerate geometry is
//! skipped silently, and per-host processing failures are isolated and
//! recorded as data in the pipeline's scan statistics.

use crate::ids::{DocumentId, ElementId};

/// Result type alias for envelope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a whole run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No document is open in the host application.
    #[error("no open document")]
    NoDocument,

    /// The model contains no placed spaces; there is nothing to measure.
    #[error("no spaces found in the model")]
    NoSpaces,

    /// A host lookup failed for an element the provider itself handed out.
    #[error("element not found: {0} in {1}")]
    ElementNotFound(ElementId, DocumentId),

    /// The link transform for a document is not invertible.
    #[error("singular link transform for {0}")]
    SingularTransform(DocumentId),

    /// Opaque failure inside the host provider.
    #[error("host provider error: {0}")]
    Provider(String),
}
