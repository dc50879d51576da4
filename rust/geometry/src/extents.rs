// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Oriented face-extent measurement.
//!
//! A face's true planar extents are the min/max spread of its tessellated
//! boundary projected onto the local height/width basis. Area is the face's
//! native area, not the extent product — boundary faces are frequently
//! non-rectangular after clipping.

use crate::basis::derive_plane_basis;
use crate::polygon::shoelace_area;
use crate::units::{feet_to_meters, square_feet_to_square_meters};
use roomscan_model::PlanarFace;

/// Measured extents of one face, metric.
///
/// A record with sub-threshold extents is fully zeroed — extents and area
/// together — so downstream code sees either a usable measurement or an
/// unambiguous suppression sentinel, never a partial one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceExtents {
    /// Height-like extent, meters.
    pub extent_a: f64,
    /// Width-like extent, meters.
    pub extent_b: f64,
    /// Face-native area, square meters.
    pub area: f64,
    pub is_horizontal: bool,
}

impl FaceExtents {
    fn suppressed(is_horizontal: bool) -> Self {
        Self {
            extent_a: 0.0,
            extent_b: 0.0,
            area: 0.0,
            is_horizontal,
        }
    }

    /// Whether this face fell under the minimum-extent threshold.
    pub fn is_suppressed(&self) -> bool {
        self.extent_a == 0.0 && self.extent_b == 0.0 && self.area == 0.0
    }
}

/// Measures a face's planar extents in its local basis.
///
/// Every boundary point is projected onto the width axis `h` and height
/// axis `v`; the spreads along each are the raw extents. If either extent
/// falls below `min_extent_m` (tiny clipped slivers), the whole result is
/// zeroed as a suppression sentinel.
pub fn measure_face_extents(face: &PlanarFace, min_extent_m: f64) -> FaceExtents {
    let basis = match derive_plane_basis(&face.normal) {
        Some(b) => b,
        None => return FaceExtents::suppressed(false),
    };

    let mut min_h = f64::MAX;
    let mut max_h = f64::MIN;
    let mut min_v = f64::MAX;
    let mut max_v = f64::MIN;
    let mut seen = false;

    for p in face.boundary_points() {
        let rel = p - face.origin;
        let u = rel.dot(&basis.h);
        let w = rel.dot(&basis.v);
        min_h = min_h.min(u);
        max_h = max_h.max(u);
        min_v = min_v.min(w);
        max_v = max_v.max(w);
        seen = true;
    }

    if !seen {
        return FaceExtents::suppressed(basis.is_horizontal);
    }

    let extent_a = feet_to_meters(max_v - min_v);
    let extent_b = feet_to_meters(max_h - min_h);

    if extent_a < min_extent_m || extent_b < min_extent_m {
        return FaceExtents::suppressed(basis.is_horizontal);
    }

    let native_area = if face.area > 0.0 {
        face.area
    } else {
        loop_area(face, &basis)
    };
    let area = square_feet_to_square_meters(native_area);

    if area <= 0.0 {
        return FaceExtents::suppressed(basis.is_horizontal);
    }

    FaceExtents {
        extent_a,
        extent_b,
        area,
        is_horizontal: basis.is_horizontal,
    }
}

/// Shoelace fallback when the host reports no native area: outer loop minus
/// holes, in the face's own plane.
fn loop_area(face: &PlanarFace, basis: &crate::basis::PlaneBasis) -> f64 {
    let project = |points: &[nalgebra::Point3<f64>]| -> Vec<(f64, f64)> {
        points
            .iter()
            .map(|p| {
                let rel = p - face.origin;
                (rel.dot(&basis.h), rel.dot(&basis.v))
            })
            .collect()
    };

    let mut loops = face.loops.iter();
    let outer = match loops.next() {
        Some(outer) => shoelace_area(&project(outer)).abs(),
        None => return 0.0,
    };
    let holes: f64 = loops.map(|l| shoelace_area(&project(l)).abs()).sum();
    (outer - holes).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};
    use roomscan_model::PlanarFace;

    const MIN_EXTENT_M: f64 = 0.05;

    /// Vertical rectangle in the XZ plane: `width` by `height` feet.
    fn wall_face(width: f64, height: f64, area: f64) -> PlanarFace {
        PlanarFace {
            origin: Point3::new(width / 2.0, 0.0, height / 2.0),
            normal: Vector3::new(0.0, -1.0, 0.0),
            area,
            loops: vec![vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(width, 0.0, 0.0),
                Point3::new(width, 0.0, height),
                Point3::new(0.0, 0.0, height),
            ]],
        }
    }

    #[test]
    fn rectangle_extents_in_meters() {
        // 10 ft wide, 8 ft high
        let face = wall_face(10.0, 8.0, 80.0);
        let e = measure_face_extents(&face, MIN_EXTENT_M);
        assert!(!e.is_suppressed());
        assert!(!e.is_horizontal);
        assert_relative_eq!(e.extent_a, feet_to_meters(8.0), epsilon = 1e-12);
        assert_relative_eq!(e.extent_b, feet_to_meters(10.0), epsilon = 1e-12);
        assert_relative_eq!(e.area, square_feet_to_square_meters(80.0), epsilon = 1e-12);
    }

    #[test]
    fn horizontal_face_is_flagged() {
        let face = PlanarFace {
            origin: Point3::new(1.0, 1.0, 0.0),
            normal: Vector3::new(0.0, 0.0, 1.0),
            area: 4.0,
            loops: vec![vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.0, 2.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
            ]],
        };
        let e = measure_face_extents(&face, MIN_EXTENT_M);
        assert!(e.is_horizontal);
        assert!(!e.is_suppressed());
    }

    #[test]
    fn tiny_face_fully_zeroed() {
        // 0.1 ft ≈ 3 cm — below the 5 cm threshold on one axis only
        let face = wall_face(10.0, 0.1, 1.0);
        let e = measure_face_extents(&face, MIN_EXTENT_M);
        // Never one positive dimension: the whole record zeroes out
        assert!(e.is_suppressed());
        assert_eq!(e.extent_a, 0.0);
        assert_eq!(e.extent_b, 0.0);
        assert_eq!(e.area, 0.0);
    }

    #[test]
    fn missing_native_area_uses_shoelace() {
        let face = wall_face(10.0, 8.0, 0.0);
        let e = measure_face_extents(&face, MIN_EXTENT_M);
        assert_relative_eq!(e.area, square_feet_to_square_meters(80.0), epsilon = 1e-9);
    }

    #[test]
    fn hole_loops_reduce_fallback_area() {
        let mut face = wall_face(10.0, 8.0, 0.0);
        // 2 ft x 2 ft hole
        face.loops.push(vec![
            Point3::new(4.0, 0.0, 3.0),
            Point3::new(6.0, 0.0, 3.0),
            Point3::new(6.0, 0.0, 5.0),
            Point3::new(4.0, 0.0, 5.0),
        ]);
        let e = measure_face_extents(&face, MIN_EXTENT_M);
        assert_relative_eq!(e.area, square_feet_to_square_meters(76.0), epsilon = 1e-9);
    }

    #[test]
    fn degenerate_normal_suppressed() {
        let mut face = wall_face(10.0, 8.0, 80.0);
        face.normal = Vector3::new(0.0, 0.0, 0.0);
        assert!(measure_face_extents(&face, MIN_EXTENT_M).is_suppressed());
    }
}
