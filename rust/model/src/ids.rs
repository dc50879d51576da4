// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identity newtypes for host elements and documents.

use serde::{Deserialize, Serialize};

/// Stable identifier of an element within one host document.
///
/// The pipeline never dereferences ids itself; they are lookup keys handed
/// back to the [`ModelProvider`](crate::ModelProvider).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a host document.
///
/// The main (active) document is [`DocumentId::MAIN`]; linked documents get
/// provider-assigned ids. Elements resolved across a link carry an explicit
/// transform back into main coordinates (see
/// [`HostRef`](crate::provider::HostRef)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(pub u32);

impl DocumentId {
    /// The main open document.
    pub const MAIN: DocumentId = DocumentId(0);

    /// Whether this is the main document (no link transform needed).
    pub fn is_main(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "doc:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_document_is_main() {
        assert!(DocumentId::MAIN.is_main());
        assert!(!DocumentId(3).is_main());
    }

    #[test]
    fn element_id_display() {
        assert_eq!(ElementId(42).to_string(), "#42");
    }
}
