// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Probe-solid construction for layer tracing.

use crate::basis::derive_plane_basis;
use nalgebra::{Point3, Vector3};
use roomscan_model::ProbeSolid;

/// Builds a thin rectangular prism probe: a `width × width` cross section
/// in the face's local basis, extruded `depth` along the outward normal
/// from `sample`. All lengths in host units.
///
/// Returns `None` when the outward normal is degenerate.
pub fn build_probe(
    sample: Point3<f64>,
    outward: &Vector3<f64>,
    width: f64,
    depth: f64,
) -> Option<ProbeSolid> {
    let n = outward.try_normalize(1e-10)?;
    let basis = derive_plane_basis(&n)?;
    Some(ProbeSolid {
        origin: sample,
        axis_h: basis.h,
        axis_v: basis.v,
        axis_n: n,
        half_width: width / 2.0,
        depth,
    })
}
