// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial index over space volumes.
//!
//! Built once per run from the host's space enumeration and read-only
//! thereafter. Containment is tested against each space's bounding box —
//! fast but approximate: a point near a box corner can report "inside" even
//! when it lies outside the true polyhedral volume. The [`ContainmentQuery`]
//! trait exists so an exact point-in-solid implementation can be swapped in
//! behind the same interface.

use nalgebra::Point3;
use roomscan_model::{ElementId, SpaceVolume};
use rustc_hash::FxHashMap;

/// Point-in-space queries the classifiers are written against.
pub trait ContainmentQuery {
    /// First space containing the point, other than `exclude`. Linear in
    /// the number of spaces.
    fn find_space_containing(
        &self,
        point: &Point3<f64>,
        exclude: Option<ElementId>,
    ) -> Option<ElementId>;

    /// Whether one specific space contains the point.
    fn contains(&self, space: ElementId, point: &Point3<f64>) -> bool;
}

/// Bounding-box containment index over all spaces of the current run.
#[derive(Debug)]
pub struct SpatialIndex {
    spaces: Vec<SpaceVolume>,
    by_id: FxHashMap<ElementId, usize>,
}

impl SpatialIndex {
    /// Stores the space list for the run. Rebuilt per command invocation;
    /// no incremental updates.
    pub fn build(spaces: &[SpaceVolume]) -> Self {
        let by_id = spaces
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id, i))
            .collect();
        Self {
            spaces: spaces.to_vec(),
            by_id,
        }
    }

    pub fn space(&self, id: ElementId) -> Option<&SpaceVolume> {
        self.by_id.get(&id).map(|&i| &self.spaces[i])
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}

impl ContainmentQuery for SpatialIndex {
    fn find_space_containing(
        &self,
        point: &Point3<f64>,
        exclude: Option<ElementId>,
    ) -> Option<ElementId> {
        self.spaces
            .iter()
            .find(|s| Some(s.id) != exclude && s.bounds.contains(point))
            .map(|s| s.id)
    }

    fn contains(&self, space: ElementId, point: &Point3<f64>) -> bool {
        self.space(space)
            .map(|s| s.bounds.contains(point))
            .unwrap_or(false)
    }
}
