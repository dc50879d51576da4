// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Local height/width basis for a planar face.
//!
//! The vertical basis is the global up-axis projected onto the face plane.
//! When that projection vanishes the face is horizontal and an arbitrary
//! in-plane pair is used instead.

use nalgebra::Vector3;

/// Threshold below which the projected up-axis counts as vanished.
const HORIZONTAL_EPSILON: f64 = 1e-6;

/// Orthonormal in-plane basis for a face with unit normal `n`:
/// `v` is height-like, `h = n × v` is width-like.
#[derive(Debug, Clone, Copy)]
pub struct PlaneBasis {
    pub h: Vector3<f64>,
    pub v: Vector3<f64>,
    /// True when the up-axis projection vanished (floor/ceiling face).
    pub is_horizontal: bool,
}

/// Derives the local basis for a face normal. Returns `None` when the
/// normal itself is degenerate.
pub fn derive_plane_basis(normal: &Vector3<f64>) -> Option<PlaneBasis> {
    let n = normal.try_normalize(1e-10)?;
    let up = Vector3::z();

    // v = up − (up·n)n, the up-axis projected into the face plane
    let projected = up - n * up.dot(&n);

    if projected.norm() < HORIZONTAL_EPSILON {
        // Horizontal face: any in-plane pair will do
        let fallback = if n.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        let h = n.cross(&fallback).normalize();
        let v = n.cross(&h);
        return Some(PlaneBasis {
            h,
            v,
            is_horizontal: true,
        });
    }

    let v = projected.normalize();
    let h = n.cross(&v);
    Some(PlaneBasis {
        h,
        v,
        is_horizontal: false,
    })
}
