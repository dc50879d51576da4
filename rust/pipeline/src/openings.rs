// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opening collection on exterior walls.
//!
//! Windows and doors are measured from their instance bounding boxes
//! projected onto the host wall's local axes. An opening that geometrically
//! sits on the wall may logically serve the room on the other side; the
//! inward-offset containment check excludes those. When a host wall carries
//! no openings at all, coplanar walls just behind it are tried as a
//! fallback — finish layers are often modeled as separate wall elements
//! from the structural leaf that actually hosts the windows.

use crate::config::ScanConfig;
use crate::spatial::ContainmentQuery;
use nalgebra::Vector3;
use roomscan_geometry::{feet_to_meters, meters_to_feet};
use roomscan_model::{
    BoundaryInfo, DiagnosticLog, ElementId, Error, HostRef, ModelProvider, Orientation, Result,
};

pub struct OpeningCollector<'a> {
    provider: &'a dyn ModelProvider,
    index: &'a dyn ContainmentQuery,
    log: &'a dyn DiagnosticLog,
    config: &'a ScanConfig,
}

impl<'a> OpeningCollector<'a> {
    pub fn new(
        provider: &'a dyn ModelProvider,
        index: &'a dyn ContainmentQuery,
        log: &'a dyn DiagnosticLog,
        config: &'a ScanConfig,
    ) -> Self {
        Self {
            provider,
            index,
            log,
            config,
        }
    }

    /// Openings on the host wall, falling back to coplanar walls behind it
    /// when the host itself carries none.
    pub fn collect_with_fallback(
        &self,
        host: &HostRef,
        outward: &Vector3<f64>,
        space: ElementId,
        orientation: Orientation,
    ) -> Result<Vec<BoundaryInfo>> {
        let direct = self.collect(host, outward, space, orientation)?;
        if !direct.is_empty() {
            return Ok(direct);
        }

        let max_offset = meters_to_feet(self.config.coplanar_max_offset_m);
        let mut found = Vec::new();
        for wall in self.find_coplanar_walls_behind(host, outward, max_offset)? {
            let behind = HostRef {
                element: wall,
                document: host.document,
                to_main: host.to_main,
            };
            found.extend(self.collect(&behind, outward, space, orientation)?);
        }
        if !found.is_empty() {
            self.log.info(
                Some(&self.provider.document_name(host.document)),
                &format!(
                    "wall {} carries no openings; found {} on coplanar walls behind it",
                    host.element,
                    found.len()
                ),
            );
        }
        Ok(found)
    }

    /// Measures every window/door instance hosted on the wall that belongs
    /// to `space`. Orientation is inherited from the wall's outward normal,
    /// not recomputed per opening.
    pub fn collect(
        &self,
        host: &HostRef,
        outward: &Vector3<f64>,
        space: ElementId,
        orientation: Orientation,
    ) -> Result<Vec<BoundaryInfo>> {
        // Horizontal basis along the wall; degenerate for horizontal faces,
        // where any plan axis serves
        let along = outward
            .cross(&Vector3::z())
            .try_normalize(1e-10)
            .unwrap_or_else(Vector3::x);

        let inset = meters_to_feet(self.config.opening_inset_m);
        let mut openings = Vec::new();

        for id in self
            .provider
            .hosted_openings(host.document, host.element)?
        {
            let info = self.provider.element(host.document, id)?;
            let bounds = self.provider.element_bounds(host.document, id);
            let center = match info.center(bounds.as_ref()) {
                Some(c) => c,
                None => continue,
            };
            let center_main = host.to_main.transform_point(&center);

            // Confirm the opening serves this room, not the one behind
            let probe = center_main - outward * inset;
            if !self.index.contains(space, &probe) {
                continue;
            }

            let bounds = match bounds {
                Some(b) => b,
                None => continue,
            };
            let corners = bounds.corners().map(|c| host.to_main.transform_point(&c));

            let mut min_z = f64::MAX;
            let mut max_z = f64::MIN;
            let mut min_u = f64::MAX;
            let mut max_u = f64::MIN;
            for c in &corners {
                min_z = min_z.min(c.z);
                max_z = max_z.max(c.z);
                let u = c.coords.dot(&along);
                min_u = min_u.min(u);
                max_u = max_u.max(u);
            }

            let height = feet_to_meters(max_z - min_z);
            let width = feet_to_meters(max_u - min_u);
            if height < self.config.min_extent_m || width < self.config.min_extent_m {
                continue;
            }

            openings.push(BoundaryInfo {
                host: Some(id),
                category: Some(info.category),
                family: info.family,
                type_name: info.type_name,
                extent_a: height,
                extent_b: width,
                area: height * width,
                orientation,
            });
        }

        Ok(openings)
    }

    /// Walls parallel to the host and offset a non-negative distance behind
    /// it along the outward normal, up to `max_offset` (host units). Never
    /// returns the host itself and never a wall on the near side.
    pub fn find_coplanar_walls_behind(
        &self,
        host: &HostRef,
        outward: &Vector3<f64>,
        max_offset: f64,
    ) -> Result<Vec<ElementId>> {
        let to_doc = host
            .to_main
            .try_inverse()
            .ok_or(Error::SingularTransform(host.document))?;
        let outward_doc = match to_doc.transform_vector(outward).try_normalize(1e-10) {
            Some(d) => d,
            None => return Ok(Vec::new()),
        };

        let host_info = self.provider.element(host.document, host.element)?;
        let host_bounds = self.provider.element_bounds(host.document, host.element);
        let host_center = match host_info.center(host_bounds.as_ref()) {
            Some(c) => c,
            None => return Ok(Vec::new()),
        };
        let host_dir = match host_info
            .orientation
            .and_then(|o| o.try_normalize(1e-10))
        {
            Some(d) => d,
            None => return Ok(Vec::new()),
        };

        // Search envelope: the host bounds swept outward by max_offset
        let envelope = match host_bounds {
            Some(b) => {
                let mut env = b.clone();
                for c in b.corners() {
                    env.expand(&(c + outward_doc * max_offset));
                }
                env
            }
            None => return Ok(Vec::new()),
        };

        let mut behind = Vec::new();
        for id in self.provider.walls(host.document)? {
            if id == host.element {
                continue;
            }
            let info = self.provider.element(host.document, id)?;
            let dir = match info.orientation.and_then(|o| o.try_normalize(1e-10)) {
                Some(d) => d,
                None => continue,
            };
            if dir.dot(&host_dir) < self.config.coplanar_parallel_dot {
                continue;
            }

            let bounds = match self.provider.element_bounds(host.document, id) {
                Some(b) => b,
                None => continue,
            };
            if !bounds.intersects(&envelope) {
                continue;
            }

            let center = match info.center(Some(&bounds)) {
                Some(c) => c,
                None => continue,
            };
            let offset = (center - host_center).dot(&outward_doc);
            if offset >= 0.0 && offset <= max_offset {
                behind.push(id);
            }
        }

        Ok(behind)
    }
}
