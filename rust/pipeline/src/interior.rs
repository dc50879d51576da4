// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interior partition wall detection.
//!
//! A wall whose outward side, stepped well past any plausible wall
//! thickness, lands inside another space is a partition between two rooms
//! and does not belong to the envelope. This is a heuristic, not a solid
//! intersection test: a wall thicker than the step distance can be missed.

use crate::spatial::ContainmentQuery;
use nalgebra::{Point3, Vector3};
use roomscan_model::{DiagnosticLog, SpaceVolume};

pub struct InteriorWallFilter<'a> {
    index: &'a dyn ContainmentQuery,
    log: &'a dyn DiagnosticLog,
    /// Step distance in host units.
    step: f64,
}

impl<'a> InteriorWallFilter<'a> {
    pub fn new(index: &'a dyn ContainmentQuery, log: &'a dyn DiagnosticLog, step: f64) -> Self {
        Self { index, log, step }
    }

    /// Whether the wall centered at `wall_center` (main coordinates) is an
    /// interior partition as seen from `space`.
    ///
    /// The outward normal is flattened to the horizontal plane and the probe
    /// is placed at the space's mid-height, so sloped faces and level
    /// differences between rooms do not skew the test. A degenerate outward
    /// direction falls back to the horizontal vector from the wall center
    /// toward the space's bounding-box center, best effort.
    pub fn is_interior_wall(
        &self,
        space: &SpaceVolume,
        wall_center: &Point3<f64>,
        outward: &Vector3<f64>,
    ) -> bool {
        let horizontal = Vector3::new(outward.x, outward.y, 0.0);
        let direction = match horizontal.try_normalize(1e-10) {
            Some(d) => d,
            None => {
                let toward_space = space.bounds.center() - wall_center;
                let fallback = Vector3::new(toward_space.x, toward_space.y, 0.0);
                match fallback.try_normalize(1e-10) {
                    Some(d) => d,
                    None => {
                        self.log.warning(
                            None,
                            &format!(
                                "no usable probe direction for wall near space {}; keeping wall",
                                space.id
                            ),
                        );
                        return false;
                    }
                }
            }
        };

        let mid_height = space.bounds.center().z;
        let probe = Point3::new(
            wall_center.x + direction.x * self.step,
            wall_center.y + direction.y * self.step,
            mid_height,
        );

        self.index
            .find_space_containing(&probe, Some(space.id))
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::SpatialIndex;
    use roomscan_model::{BoundingBox, ElementId, NullLog};

    fn room(id: u64, min_x: f64, max_x: f64) -> SpaceVolume {
        SpaceVolume {
            id: ElementId(id),
            name: String::new(),
            number: String::new(),
            area: 100.0,
            bounds: BoundingBox::new(
                Point3::new(min_x, 0.0, 0.0),
                Point3::new(max_x, 10.0, 9.0),
            ),
        }
    }

    #[test]
    fn partition_between_rooms_is_interior() {
        let rooms = vec![room(1, 0.0, 10.0), room(2, 10.5, 20.0)];
        let index = SpatialIndex::build(&rooms);
        let log = NullLog;
        // 5 ft step lands well inside room 2
        let filter = InteriorWallFilter::new(&index, &log, 5.0);

        let wall_center = Point3::new(10.25, 5.0, 4.5);
        assert!(filter.is_interior_wall(&rooms[0], &wall_center, &Vector3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn facade_wall_is_not_interior() {
        let rooms = vec![room(1, 0.0, 10.0)];
        let index = SpatialIndex::build(&rooms);
        let log = NullLog;
        let filter = InteriorWallFilter::new(&index, &log, 5.0);

        let wall_center = Point3::new(0.0, 5.0, 4.5);
        assert!(!filter.is_interior_wall(&rooms[0], &wall_center, &Vector3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn degenerate_outward_uses_space_center_fallback() {
        let rooms = vec![room(1, 0.0, 10.0), room(2, 10.5, 20.0)];
        let index = SpatialIndex::build(&rooms);
        let log = NullLog;
        let filter = InteriorWallFilter::new(&index, &log, 5.0);

        // Vertical-only outward flattens to zero; fallback points from the
        // wall center toward room 1's center, i.e. -x, away from room 2.
        let wall_center = Point3::new(10.25, 5.0, 4.5);
        assert!(!filter.is_interior_wall(&rooms[0], &wall_center, &Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn probe_uses_space_mid_height() {
        // Room 2 only overlaps room 1's height band at mid-height
        let rooms = vec![room(1, 0.0, 10.0), room(2, 10.5, 20.0)];
        let index = SpatialIndex::build(&rooms);
        let log = NullLog;
        let filter = InteriorWallFilter::new(&index, &log, 5.0);

        // Wall center near the floor: probe still lands at z = 4.5
        let wall_center = Point3::new(10.25, 5.0, 0.1);
        assert!(filter.is_interior_wall(&rooms[0], &wall_center, &Vector3::new(1.0, 0.0, 0.0)));
    }
}
