// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall-layer tracing.
//!
//! Layered wall assemblies (structural leaf, insulation, cladding) are often
//! modeled as separate parallel solids rather than one compound wall type.
//! A thin probe prism extruded outward from the face sample point picks up
//! every element stacked behind the boundary; for each wall-like candidate
//! the face most nearly parallel to, and farthest along, the outward normal
//! is its true outer face. Hits are ordered nearest first by their signed
//! distance from the fixed sample point.

use crate::config::ScanConfig;
use nalgebra::{Point3, Vector3};
use roomscan_geometry::{build_probe, meters_to_feet};
use roomscan_model::{
    DiagnosticLog, DocumentId, ElementInfo, Error, HostRef, ModelProvider, PlanarFace, Result,
};
use smallvec::SmallVec;

/// One discovered wall layer, transient: converted to a boundary record by
/// the orchestrator and not retained.
#[derive(Debug, Clone)]
pub struct LayerHit {
    pub info: ElementInfo,
    pub document: DocumentId,
    /// Signed distance of the outer face along the outward normal from the
    /// probe sample point, host units.
    pub distance: f64,
    /// The element's outer face, in its document's coordinates.
    pub outer_face: PlanarFace,
}

pub struct LayerTracer<'a> {
    provider: &'a dyn ModelProvider,
    log: &'a dyn DiagnosticLog,
    config: &'a ScanConfig,
}

impl<'a> LayerTracer<'a> {
    pub fn new(
        provider: &'a dyn ModelProvider,
        log: &'a dyn DiagnosticLog,
        config: &'a ScanConfig,
    ) -> Self {
        Self {
            provider,
            log,
            config,
        }
    }

    /// Discovers the stack of parallel wall layers outward from a face
    /// sample point, nearest first.
    pub fn trace_layers(
        &self,
        host: &HostRef,
        sample: &Point3<f64>,
        outward: &Vector3<f64>,
    ) -> Result<SmallVec<[LayerHit; 4]>> {
        let width = meters_to_feet(self.config.layer_probe_width_m);
        let depth = meters_to_feet(self.config.layer_max_depth_m);

        let probe = match build_probe(*sample, outward, width, depth) {
            Some(p) => p,
            None => return Ok(SmallVec::new()),
        };

        let to_doc = host
            .to_main
            .try_inverse()
            .ok_or(Error::SingularTransform(host.document))?;
        let probe_doc = probe.transformed(&to_doc);
        let sample_doc = to_doc.transform_point(sample);
        let outward_doc = match to_doc.transform_vector(outward).try_normalize(1e-10) {
            Some(d) => d,
            None => return Ok(SmallVec::new()),
        };

        let mut hits: SmallVec<[LayerHit; 4]> = SmallVec::new();
        for id in self
            .provider
            .elements_intersecting(host.document, &probe_doc)?
        {
            let info = self.provider.element(host.document, id)?;
            if !info.category.is_wall_like() {
                continue;
            }

            let mut outer: Option<(f64, PlanarFace)> = None;
            for face in self.provider.planar_faces(host.document, id)? {
                let n = match face.normal.try_normalize(1e-10) {
                    Some(n) => n,
                    None => continue,
                };
                if n.dot(&outward_doc) < self.config.layer_parallel_dot {
                    continue;
                }
                let distance = (face.origin - sample_doc).dot(&outward_doc);
                // The farthest qualifying face is the element's outer face
                if outer.as_ref().map(|(d, _)| distance > *d).unwrap_or(true) {
                    outer = Some((distance, face));
                }
            }

            if let Some((distance, outer_face)) = outer {
                hits.push(LayerHit {
                    info,
                    document: host.document,
                    distance,
                    outer_face,
                });
            }
        }

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        if hits.len() > 1 {
            self.log.info(
                Some(&self.provider.document_name(host.document)),
                &format!(
                    "wall {} resolved to {} stacked layers",
                    host.element,
                    hits.len()
                ),
            );
        }

        Ok(hits)
    }
}
