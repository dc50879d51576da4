// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host element descriptors: categories, locations, and type labels.

use crate::geom::BoundingBox;
use crate::ids::ElementId;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Host element category, reduced to what the envelope pipeline needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Wall,
    CurtainPanel,
    Window,
    Door,
    Space,
    Other,
}

impl Category {
    /// Categories eligible as wall layers during layer tracing.
    pub fn is_wall_like(&self) -> bool {
        matches!(self, Category::Wall | Category::CurtainPanel)
    }

    /// Categories collected as openings on a host wall.
    pub fn is_opening(&self) -> bool {
        matches!(self, Category::Window | Category::Door)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Wall => "Wall",
            Category::CurtainPanel => "CurtainPanel",
            Category::Window => "Window",
            Category::Door => "Door",
            Category::Space => "Space",
            Category::Other => "Other",
        }
    }
}

/// Placement of an element as reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// Curve-based placement (wall centerline), start and end points.
    Line {
        start: Point3<f64>,
        end: Point3<f64>,
    },
    /// Point placement (family instances).
    Point(Point3<f64>),
}

impl Location {
    /// Midpoint of the placement.
    pub fn midpoint(&self) -> Point3<f64> {
        match self {
            Location::Line { start, end } => nalgebra::center(start, end),
            Location::Point(p) => *p,
        }
    }
}

/// Snapshot of one host element, in its own document's coordinates.
#[derive(Debug, Clone)]
pub struct ElementInfo {
    pub id: ElementId,
    pub category: Category,
    /// Family label, e.g. "Basic Wall".
    pub family: String,
    /// Type label, e.g. "Generic 200mm".
    pub type_name: String,
    /// Placement, if the host exposes one.
    pub location: Option<Location>,
    /// Facing vector for walls (the host's exterior-side orientation).
    pub orientation: Option<Vector3<f64>>,
}

impl ElementInfo {
    /// Placement midpoint, falling back to the bounding-box center when the
    /// element has no curve or point location.
    pub fn center(&self, bounds: Option<&BoundingBox>) -> Option<Point3<f64>> {
        match &self.location {
            Some(loc) => Some(loc.midpoint()),
            None => bounds.map(BoundingBox::center),
        }
    }
}
