// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The host-application boundary.
//!
//! [`ModelProvider`] is everything the envelope pipeline consumes from the
//! host: space enumeration, boundary-face geometry, element lookups, and a
//! solid-intersection query. The pipeline makes no assumption about how the
//! host computes any of it.
//!
//! Coordinate conventions:
//! - Space volumes and boundary (sub)face geometry are in **main-document**
//!   coordinates.
//! - Per-element geometry (`element_bounds`, `planar_faces`, locations in
//!   [`ElementInfo`](crate::ElementInfo)) is in the element's **own
//!   document's** coordinates; [`HostRef::to_main`] maps it back.
//! - All lengths are host internal units (feet).

use crate::element::ElementInfo;
use crate::error::Result;
use crate::geom::{BoundingBox, PlanarFace, ProbeSolid};
use crate::ids::{DocumentId, ElementId};
use crate::space::SpaceVolume;
use nalgebra::Matrix4;

/// Weak reference to the host element behind a boundary subface, including
/// the transform from its document into main coordinates (identity for the
/// main document).
#[derive(Debug, Clone)]
pub struct HostRef {
    pub element: ElementId,
    pub document: DocumentId,
    pub to_main: Matrix4<f64>,
}

impl HostRef {
    /// Host element in the main document.
    pub fn local(element: ElementId) -> Self {
        Self {
            element,
            document: DocumentId::MAIN,
            to_main: Matrix4::identity(),
        }
    }
}

/// One clipped piece of a host element's face touching a space face.
#[derive(Debug, Clone)]
pub struct BoundarySubface {
    /// Clipped face geometry, main coordinates.
    pub face: PlanarFace,
    /// Host element, or `None` for a free boundary.
    pub host: Option<HostRef>,
}

/// One face of a space's bounding solid together with the host subfaces
/// clipped against it.
#[derive(Debug, Clone)]
pub struct SpaceFace {
    pub face: PlanarFace,
    pub subfaces: Vec<BoundarySubface>,
}

/// Read-only access to the host model. Implemented by the host adapter;
/// implemented by mocks in tests.
pub trait ModelProvider {
    /// All placed room/space volumes in the main document.
    fn spaces(&self) -> Result<Vec<SpaceVolume>>;

    /// Boundary faces of one space's solid, with their clipped subfaces.
    fn boundary_faces(&self, space: ElementId) -> Result<Vec<SpaceFace>>;

    /// Category, labels, and placement of an element.
    fn element(&self, document: DocumentId, id: ElementId) -> Result<ElementInfo>;

    /// Bounding box of an element in its document's coordinates, if the host
    /// can produce one.
    fn element_bounds(&self, document: DocumentId, id: ElementId) -> Option<BoundingBox>;

    /// Window/door instances hosted on a wall.
    fn hosted_openings(&self, document: DocumentId, wall: ElementId) -> Result<Vec<ElementId>>;

    /// All wall elements in a document. Used by the coplanar-walls-behind
    /// fallback when finish layers are modeled as separate walls.
    fn walls(&self, document: DocumentId) -> Result<Vec<ElementId>>;

    /// Planar faces of an element's solid geometry, document coordinates.
    fn planar_faces(&self, document: DocumentId, id: ElementId) -> Result<Vec<PlanarFace>>;

    /// Elements of a document whose solids intersect the probe. The probe is
    /// already expressed in that document's coordinates.
    fn elements_intersecting(
        &self,
        document: DocumentId,
        probe: &ProbeSolid,
    ) -> Result<Vec<ElementId>>;

    /// Display name of a document, for diagnostics.
    fn document_name(&self, document: DocumentId) -> String;
}
