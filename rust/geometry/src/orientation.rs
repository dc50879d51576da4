// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Compass quantization of wall orientation against true north.
//!
//! Orientation is bucketed into four 90°-wide sectors centered on the
//! cardinal directions, with sector boundaries at 45°, 135°, 225° and 315°.
//! A boundary angle belongs to the next sector clockwise: 45° is East.

use nalgebra::Vector3;
use roomscan_model::Orientation;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

/// Normals whose plan projection is shorter than this are treated as
/// vertical (horizontal face → no compass orientation).
const PLAN_EPSILON: f64 = 1e-6;

/// Quantizes a compass angle (radians, 0 = north, 90° = east) into the four
/// cardinal buckets.
pub fn quantize_orientation(angle: f64) -> Orientation {
    // Rotate so 0 aligns with north, then normalize to [0, 2π)
    let mut rotated = (angle - FRAC_PI_2) % TAU;
    if rotated < 0.0 {
        rotated += TAU;
    }

    // Sector boundaries at 45°, 135°, 225°, 315° in the rotated frame
    if rotated < FRAC_PI_4 || rotated >= 7.0 * FRAC_PI_4 {
        Orientation::East
    } else if rotated < 3.0 * FRAC_PI_4 {
        Orientation::South
    } else if rotated < 5.0 * FRAC_PI_4 {
        Orientation::West
    } else {
        Orientation::North
    }
}

/// Compass orientation of an outward face normal.
///
/// `true_north` is the angle of true north in project plan coordinates,
/// radians clockwise from the project +Y axis. Horizontal faces (vertical
/// normals) have no compass orientation.
pub fn orientation_of_normal(normal: &Vector3<f64>, true_north: f64) -> Orientation {
    if normal.x.hypot(normal.y) < PLAN_EPSILON {
        return Orientation::NotApplicable;
    }
    // Bearing: clockwise from project north (+Y), then corrected to true north
    let bearing = normal.x.atan2(normal.y) - true_north;
    quantize_orientation(bearing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deg(d: f64) -> f64 {
        d.to_radians()
    }

    #[test]
    fn sector_midpoints() {
        assert_eq!(quantize_orientation(deg(0.0)), Orientation::North);
        assert_eq!(quantize_orientation(deg(90.0)), Orientation::East);
        assert_eq!(quantize_orientation(deg(180.0)), Orientation::South);
        assert_eq!(quantize_orientation(deg(270.0)), Orientation::West);
    }

    #[test]
    fn sector_boundaries_belong_clockwise() {
        assert_eq!(quantize_orientation(deg(45.0)), Orientation::East);
        assert_eq!(quantize_orientation(deg(135.0)), Orientation::South);
        assert_eq!(quantize_orientation(deg(225.0)), Orientation::West);
        assert_eq!(quantize_orientation(deg(315.0)), Orientation::North);
        // Just below each boundary stays in the previous sector
        assert_eq!(quantize_orientation(deg(44.9)), Orientation::North);
        assert_eq!(quantize_orientation(deg(134.9)), Orientation::East);
    }

    #[test]
    fn idempotent_under_full_turns() {
        assert_eq!(quantize_orientation(deg(360.0)), Orientation::North);
        assert_eq!(quantize_orientation(deg(-90.0)), Orientation::West);
        assert_eq!(quantize_orientation(deg(450.0)), Orientation::East);
    }

    #[test]
    fn normal_orientation_cardinals() {
        // Project north aligned with true north
        assert_eq!(
            orientation_of_normal(&Vector3::new(0.0, 1.0, 0.0), 0.0),
            Orientation::North
        );
        assert_eq!(
            orientation_of_normal(&Vector3::new(1.0, 0.0, 0.0), 0.0),
            Orientation::East
        );
        assert_eq!(
            orientation_of_normal(&Vector3::new(0.0, -1.0, 0.0), 0.0),
            Orientation::South
        );
        assert_eq!(
            orientation_of_normal(&Vector3::new(-1.0, 0.0, 0.0), 0.0),
            Orientation::West
        );
    }

    #[test]
    fn true_north_rotation_shifts_buckets() {
        // True north rotated 90° clockwise from project north: a +Y normal
        // now points west of true north.
        let n = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(orientation_of_normal(&n, deg(90.0)), Orientation::West);
    }

    #[test]
    fn vertical_normal_has_no_orientation() {
        assert_eq!(
            orientation_of_normal(&Vector3::new(0.0, 0.0, 1.0), 0.0),
            Orientation::NotApplicable
        );
        assert_eq!(
            orientation_of_normal(&Vector3::new(0.0, 0.0, -1.0), 0.0),
            Orientation::NotApplicable
        );
    }

    #[test]
    fn tilted_normal_uses_plan_projection() {
        // A normal tilted upward but pointing east in plan
        let n = Vector3::new(1.0, 0.0, 0.8);
        assert_eq!(orientation_of_normal(&n, 0.0), Orientation::East);
    }
}
