// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry value types exchanged with the host provider.
//!
//! These are plain data carriers; the measurement and classification math
//! lives in `roomscan-geometry`. All coordinates are in the host's internal
//! length unit (feet) unless a field says otherwise.

use nalgebra::{Matrix4, Point3, Vector3};

/// Axis-aligned bounding box in host coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Builds the smallest box enclosing all points. Returns `None` for an
    /// empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3<f64>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::new(first, first);
        for p in iter {
            bounds.expand(&p);
        }
        Some(bounds)
    }

    /// Expands the box to include a point.
    pub fn expand(&mut self, p: &Point3<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Whether two boxes overlap (touching counts).
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// The eight corners, min corner first.
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let (a, b) = (&self.min, &self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(a.x, b.y, b.z),
            Point3::new(b.x, b.y, b.z),
        ]
    }

    /// Axis-aligned box enclosing this box after an affine transform.
    pub fn transformed(&self, m: &Matrix4<f64>) -> BoundingBox {
        let corners = self.corners();
        let mut out =
            BoundingBox::new(m.transform_point(&corners[0]), m.transform_point(&corners[0]));
        for c in &corners[1..] {
            out.expand(&m.transform_point(c));
        }
        out
    }
}

/// A planar face supplied by the host: a sample point, a unit normal at that
/// point, the face's native area, and tessellated boundary loops.
///
/// The normal direction is as reported by the host geometry kernel; whether
/// it points away from the owning space is resolved empirically by the
/// classifier (see the outward/inward pair in the data model).
#[derive(Debug, Clone)]
pub struct PlanarFace {
    /// Sample point on the face (parametric midpoint).
    pub origin: Point3<f64>,
    /// Unit normal at `origin`.
    pub normal: Vector3<f64>,
    /// Native face area in square host units. Non-positive means the host
    /// could not report it; the measurement falls back to the boundary loops.
    pub area: f64,
    /// Tessellated boundary loops (outer loop plus holes), host units.
    pub loops: Vec<Vec<Point3<f64>>>,
}

impl PlanarFace {
    /// All boundary points across all loops.
    pub fn boundary_points(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.loops.iter().flatten()
    }

    /// Bounding box of the tessellated boundary, if any points exist.
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.boundary_points().copied())
    }

    /// Face re-expressed in another coordinate frame (e.g. a linked
    /// document into main). Link transforms are rigid, so the native area
    /// carries over unchanged.
    pub fn transformed(&self, m: &Matrix4<f64>) -> PlanarFace {
        PlanarFace {
            origin: m.transform_point(&self.origin),
            normal: m.transform_vector(&self.normal),
            area: self.area,
            loops: self
                .loops
                .iter()
                .map(|l| l.iter().map(|p| m.transform_point(p)).collect())
                .collect(),
        }
    }
}

/// A thin rectangular prism used to probe for wall layers: a square cross
/// section in the face's local `h`/`v` basis, extruded `depth` along the
/// outward normal `n` from `origin`.
///
/// Constructed by `roomscan-geometry::probe::build_probe`; consumed by the
/// provider's "elements intersecting" query.
#[derive(Debug, Clone)]
pub struct ProbeSolid {
    pub origin: Point3<f64>,
    pub axis_h: Vector3<f64>,
    pub axis_v: Vector3<f64>,
    pub axis_n: Vector3<f64>,
    /// Half the cross-section side length, host units.
    pub half_width: f64,
    /// Extrusion length along `axis_n`, host units.
    pub depth: f64,
}

impl ProbeSolid {
    /// The eight prism corners: near face first, then far face.
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let h = self.axis_h * self.half_width;
        let v = self.axis_v * self.half_width;
        let n = self.axis_n * self.depth;
        let o = self.origin;
        [
            o - h - v,
            o + h - v,
            o - h + v,
            o + h + v,
            o - h - v + n,
            o + h - v + n,
            o - h + v + n,
            o + h + v + n,
        ]
    }

    /// Probe re-expressed in another coordinate frame (e.g. a linked
    /// document). Axes are transformed as directions, the origin as a point.
    pub fn transformed(&self, m: &Matrix4<f64>) -> ProbeSolid {
        ProbeSolid {
            origin: m.transform_point(&self.origin),
            axis_h: m.transform_vector(&self.axis_h),
            axis_v: m.transform_vector(&self.axis_v),
            axis_n: m.transform_vector(&self.axis_n),
            half_width: self.half_width,
            depth: self.depth,
        }
    }

    /// Axis-aligned bounds of the prism, for broad-phase intersection.
    pub fn bounds(&self) -> BoundingBox {
        let corners = self.corners();
        let mut out = BoundingBox::new(corners[0], corners[0]);
        for c in &corners[1..] {
            out.expand(c);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contain_and_intersect() {
        let b = BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 3.0, 1.0));
        assert!(b.contains(&Point3::new(1.0, 1.5, 0.5)));
        assert!(b.contains(&Point3::new(2.0, 3.0, 1.0))); // inclusive
        assert!(!b.contains(&Point3::new(2.1, 1.0, 0.5)));

        let other = BoundingBox::new(Point3::new(1.5, 2.5, 0.5), Point3::new(4.0, 4.0, 2.0));
        assert!(b.intersects(&other));
        let far = BoundingBox::new(Point3::new(10.0, 10.0, 10.0), Point3::new(11.0, 11.0, 11.0));
        assert!(!b.intersects(&far));
    }

    #[test]
    fn bounds_from_points() {
        let pts = vec![
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(-2.0, 3.0, 5.0),
            Point3::new(0.0, 0.0, -1.0),
        ];
        let b = BoundingBox::from_points(pts).unwrap();
        assert_eq!(b.min, Point3::new(-2.0, -1.0, -1.0));
        assert_eq!(b.max, Point3::new(1.0, 3.0, 5.0));
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn probe_corners_span_depth() {
        let probe = ProbeSolid {
            origin: Point3::new(0.0, 0.0, 0.0),
            axis_h: Vector3::new(1.0, 0.0, 0.0),
            axis_v: Vector3::new(0.0, 0.0, 1.0),
            axis_n: Vector3::new(0.0, 1.0, 0.0),
            half_width: 0.5,
            depth: 4.0,
        };
        let bounds = probe.bounds();
        assert_eq!(bounds.min, Point3::new(-0.5, 0.0, -0.5));
        assert_eq!(bounds.max, Point3::new(0.5, 4.0, 0.5));
    }

    #[test]
    fn transformed_face_moves_with_frame() {
        let face = PlanarFace {
            origin: Point3::new(1.0, 0.0, 1.0),
            normal: Vector3::new(0.0, -1.0, 0.0),
            area: 4.0,
            loops: vec![vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 2.0),
                Point3::new(0.0, 0.0, 2.0),
            ]],
        };
        let m = Matrix4::new_translation(&Vector3::new(0.0, 7.0, 0.0));
        let t = face.transformed(&m);
        assert_eq!(t.origin, Point3::new(1.0, 7.0, 1.0));
        assert_eq!(t.normal, face.normal);
        assert_eq!(t.area, face.area);
        assert_eq!(t.loops[0][2], Point3::new(2.0, 7.0, 2.0));
    }

    #[test]
    fn transformed_box_stays_enclosing() {
        let b = BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        // Translate by (10, 0, 0)
        let m = Matrix4::new_translation(&Vector3::new(10.0, 0.0, 0.0));
        let t = b.transformed(&m);
        assert_eq!(t.min, Point3::new(10.0, 0.0, 0.0));
        assert_eq!(t.max, Point3::new(11.0, 1.0, 1.0));
    }
}
