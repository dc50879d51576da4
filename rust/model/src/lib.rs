// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Roomscan Model
//!
//! Value types and capability traits shared by the room-envelope extraction
//! pipeline. This crate is the boundary with the host BIM application: the
//! host implements [`ModelProvider`] (space volumes, boundary faces, element
//! lookups, spatial queries) and [`DiagnosticLog`], the pipeline consumes
//! them and never touches the host object model directly.
//!
//! All geometry supplied by the provider is expressed in the host's internal
//! length unit (feet). Exported records ([`Space`], [`BoundaryInfo`]) are in
//! meters; the conversion happens in `roomscan-geometry`.

pub mod element;
pub mod error;
pub mod geom;
pub mod ids;
pub mod log;
pub mod provider;
pub mod space;

pub use element::{Category, ElementInfo, Location};
pub use error::{Error, Result};
pub use geom::{BoundingBox, PlanarFace, ProbeSolid};
pub use ids::{DocumentId, ElementId};
pub use log::{DiagnosticLog, NullLog, TracingLog};
pub use provider::{BoundarySubface, HostRef, ModelProvider, SpaceFace};
pub use space::{BoundaryInfo, Orientation, Space, SpaceVolume};
