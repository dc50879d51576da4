// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Roomscan Geometry
//!
//! Pure geometric functions for the envelope pipeline: internal-unit ↔ meter
//! conversion, plane-basis derivation, oriented face-extent measurement,
//! shoelace polygon area, compass quantization against true north, and
//! probe-solid construction. No I/O, no host access.

pub mod basis;
pub mod extents;
pub mod orientation;
pub mod polygon;
pub mod probe;
pub mod units;

pub use basis::{derive_plane_basis, PlaneBasis};
pub use extents::{measure_face_extents, FaceExtents};
pub use orientation::{orientation_of_normal, quantize_orientation};
pub use polygon::shoelace_area;
pub use probe::build_probe;
pub use units::{feet_to_meters, meters_to_feet, square_feet_to_square_meters};
