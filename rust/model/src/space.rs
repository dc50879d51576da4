// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Space and boundary records — the output side of the pipeline.
//!
//! A [`Space`] is assembled once per orchestrator pass and is the unit the
//! exporter consumes. Extents and areas are in meters / square meters.

use crate::element::Category;
use crate::geom::BoundingBox;
use crate::ids::ElementId;
use serde::{Deserialize, Serialize};

/// Compass orientation of a vertical boundary face, quantized against true
/// north. Horizontal faces (floors, ceilings) are `NotApplicable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
    NotApplicable,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::North => "N",
            Orientation::East => "E",
            Orientation::South => "S",
            Orientation::West => "W",
            Orientation::NotApplicable => "NA",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One measured bounding surface attributed to a space: a wall layer, an
/// opening, or a generic clipped face.
///
/// Invariant: `extent_a`, `extent_b` and `area` are all positive. Records
/// with sub-threshold extents are suppressed before construction, never
/// emitted with zero or negative values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryInfo {
    /// Owning host element, if any. `None` is a free boundary.
    pub host: Option<ElementId>,
    /// Host category, when a host exists.
    pub category: Option<Category>,
    /// Family label of the host, empty for free boundaries.
    pub family: String,
    /// Type label of the host, empty for free boundaries.
    pub type_name: String,
    /// Height-like planar extent, meters.
    pub extent_a: f64,
    /// Width-like planar extent, meters.
    pub extent_b: f64,
    /// Face-native area, square meters. Not necessarily `extent_a *
    /// extent_b` — the source face may be non-rectangular.
    pub area: f64,
    pub orientation: Orientation,
}

impl BoundaryInfo {
    /// Export label: `Category-Type`, or `FreeBoundary` for hostless records.
    pub fn label(&self) -> String {
        match self.category {
            Some(category) => format!("{}-{}", category.label(), self.type_name),
            None => "FreeBoundary".to_string(),
        }
    }
}

/// A room/zone volume as enumerated from the host, before processing.
/// Geometry is in host units.
#[derive(Debug, Clone)]
pub struct SpaceVolume {
    pub id: ElementId,
    pub name: String,
    pub number: String,
    /// Floor area in square host units.
    pub area: f64,
    /// Volume bounds in host coordinates.
    pub bounds: BoundingBox,
}

/// A fully processed space: identity plus its ordered boundary records.
/// Immutable once the orchestrator pass for the space completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    pub id: ElementId,
    pub name: String,
    pub number: String,
    /// Floor area, square meters.
    pub area: f64,
    pub boundaries: Vec<BoundaryInfo>,
}

impl Space {
    /// Export label, e.g. `"101 Office"`.
    pub fn label(&self) -> String {
        if self.number.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.number, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_label_with_host() {
        let b = BoundaryInfo {
            host: Some(ElementId(7)),
            category: Some(Category::Wall),
            family: "Basic Wall".into(),
            type_name: "Facade 300".into(),
            extent_a: 3.0,
            extent_b: 4.0,
            area: 12.0,
            orientation: Orientation::North,
        };
        assert_eq!(b.label(), "Wall-Facade 300");
    }

    #[test]
    fn boundary_label_free() {
        let b = BoundaryInfo {
            host: None,
            category: None,
            family: String::new(),
            type_name: String::new(),
            extent_a: 1.0,
            extent_b: 1.0,
            area: 1.0,
            orientation: Orientation::NotApplicable,
        };
        assert_eq!(b.label(), "FreeBoundary");
    }

    #[test]
    fn space_label_formats() {
        let mut space = Space {
            id: ElementId(1),
            name: "Office".into(),
            number: "101".into(),
            area: 20.0,
            boundaries: Vec::new(),
        };
        assert_eq!(space.label(), "101 Office");
        space.number.clear();
        assert_eq!(space.label(), "Office");
    }

    #[test]
    fn space_serializes_round_trip() {
        let space = Space {
            id: ElementId(12),
            name: "Plant Room".into(),
            number: "B01".into(),
            area: 33.5,
            boundaries: vec![BoundaryInfo {
                host: Some(ElementId(44)),
                category: Some(Category::Window),
                family: "Fixed".into(),
                type_name: "1200x1500".into(),
                extent_a: 1.5,
                extent_b: 1.2,
                area: 1.8,
                orientation: Orientation::South,
            }],
        };
        let json = serde_json::to_string(&space).unwrap();
        let back: Space = serde_json::from_str(&json).unwrap();
        assert_eq!(back.boundaries.len(), 1);
        assert_eq!(back.boundaries[0].orientation, Orientation::South);
    }
}
