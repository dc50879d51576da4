// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interior/exterior classification of boundary faces.
//!
//! Every candidate face first gets its outward/inward normal pair resolved
//! empirically: the side whose epsilon-offset point still lies inside the
//! owning space is inward. The pair is resolved once per face and reused
//! for exterior testing, orientation and layer tracing — testing the wrong
//! side silently inverts the classification.

use crate::spatial::ContainmentQuery;
use nalgebra::{Point3, Vector3};
use roomscan_model::{DiagnosticLog, ElementId};

pub struct BoundaryClassifier<'a> {
    index: &'a dyn ContainmentQuery,
    log: &'a dyn DiagnosticLog,
    /// Probe offset in host units.
    offset: f64,
}

impl<'a> BoundaryClassifier<'a> {
    pub fn new(index: &'a dyn ContainmentQuery, log: &'a dyn DiagnosticLog, offset: f64) -> Self {
        Self { index, log, offset }
    }

    /// Resolves which direction of the face-normal pair points away from
    /// `space`. Returns `None` only for a degenerate normal.
    ///
    /// When neither offset side resolves inside the space (classification
    /// ambiguity, e.g. a sliver space thinner than the probe offset), the
    /// tested direction is kept as outward by convention.
    pub fn resolve_outward(
        &self,
        space: ElementId,
        sample: &Point3<f64>,
        normal: &Vector3<f64>,
    ) -> Option<Vector3<f64>> {
        let n = normal.try_normalize(1e-10)?;
        let inside_behind = self.index.contains(space, &(sample - n * self.offset));
        let inside_ahead = self.index.contains(space, &(sample + n * self.offset));

        match (inside_behind, inside_ahead) {
            (true, false) => Some(n),
            (false, true) => Some(-n),
            // Both or neither inside: keep the tested direction
            _ => Some(n),
        }
    }

    /// Whether the face belongs to the building envelope.
    ///
    /// The inward offset point must resolve inside the owning space; if it
    /// does not, something is off with the outward pair and the face is
    /// conservatively treated as non-exterior. The outward offset point is
    /// then probed against every other space: no match means envelope,
    /// a match means an interior partition between two rooms.
    pub fn is_exterior(
        &self,
        space: ElementId,
        sample: &Point3<f64>,
        outward: &Vector3<f64>,
    ) -> bool {
        let inward_probe = sample - outward * self.offset;
        if !self.index.contains(space, &inward_probe) {
            self.log.warning(
                None,
                &format!("inward probe left space {space}; treating face as non-exterior"),
            );
            return false;
        }

        let outward_probe = sample + outward * self.offset;
        self.index
            .find_space_containing(&outward_probe, Some(space))
            .is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::SpatialIndex;
    use roomscan_model::{BoundingBox, NullLog, SpaceVolume};

    fn two_rooms() -> SpatialIndex {
        // Two 10x10x9 ft rooms sharing the x = 10 plane
        let rooms = vec![
            SpaceVolume {
                id: ElementId(1),
                name: "Left".into(),
                number: "1".into(),
                area: 100.0,
                bounds: BoundingBox::new(
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(10.0, 10.0, 9.0),
                ),
            },
            SpaceVolume {
                id: ElementId(2),
                name: "Right".into(),
                number: "2".into(),
                area: 100.0,
                bounds: BoundingBox::new(
                    Point3::new(10.0, 0.0, 0.0),
                    Point3::new(20.0, 10.0, 9.0),
                ),
            },
        ];
        SpatialIndex::build(&rooms)
    }

    #[test]
    fn resolves_outward_by_probing() {
        let index = two_rooms();
        let log = NullLog;
        let classifier = BoundaryClassifier::new(&index, &log, 0.2);

        let sample = Point3::new(0.0, 5.0, 4.0); // west face of room 1
        // Normal pointing into the room: must be flipped
        let outward = classifier
            .resolve_outward(ElementId(1), &sample, &Vector3::new(1.0, 0.0, 0.0))
            .unwrap();
        assert!(outward.x < 0.0);
        // Normal already pointing out: kept
        let outward = classifier
            .resolve_outward(ElementId(1), &sample, &Vector3::new(-1.0, 0.0, 0.0))
            .unwrap();
        assert!(outward.x < 0.0);
    }

    #[test]
    fn degenerate_normal_is_none() {
        let index = two_rooms();
        let log = NullLog;
        let classifier = BoundaryClassifier::new(&index, &log, 0.2);
        assert!(classifier
            .resolve_outward(ElementId(1), &Point3::origin(), &Vector3::zeros())
            .is_none());
    }

    #[test]
    fn envelope_face_is_exterior() {
        let index = two_rooms();
        let log = NullLog;
        let classifier = BoundaryClassifier::new(&index, &log, 0.2);

        // West face of room 1: nothing beyond it
        let sample = Point3::new(0.0, 5.0, 4.0);
        let outward = Vector3::new(-1.0, 0.0, 0.0);
        assert!(classifier.is_exterior(ElementId(1), &sample, &outward));
    }

    #[test]
    fn shared_face_is_interior_from_both_sides() {
        let index = two_rooms();
        let log = NullLog;
        let classifier = BoundaryClassifier::new(&index, &log, 0.2);

        let sample = Point3::new(10.0, 5.0, 4.0);
        // From room 1, outward is +x and lands in room 2
        assert!(!classifier.is_exterior(ElementId(1), &sample, &Vector3::new(1.0, 0.0, 0.0)));
        // From room 2, outward is -x and lands in room 1
        assert!(!classifier.is_exterior(ElementId(2), &sample, &Vector3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn inward_probe_failure_is_non_exterior() {
        let index = two_rooms();
        let log = NullLog;
        let classifier = BoundaryClassifier::new(&index, &log, 0.2);

        // Sample far outside the space: the inward sanity check fails
        let sample = Point3::new(50.0, 50.0, 4.0);
        assert!(!classifier.is_exterior(ElementId(1), &sample, &Vector3::new(1.0, 0.0, 0.0)));
    }
}
