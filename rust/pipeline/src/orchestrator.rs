// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scan orchestration.
//!
//! [`EnvelopeScanner::run`] drives the whole pipeline: enumerate spaces,
//! build the containment index, and for every bounding subface of every
//! space resolve the outward direction, keep only exterior faces, measure
//! them, trace wall layers, and collect hosted openings. The result is one
//! [`Space`] per input volume plus run-level [`ScanStats`].
//!
//! Host elements come from linked documents as well as the main one, and a
//! single corrupt element must never abort a run. Every fallible per-host
//! step is isolated: its error becomes a [`HostFailure`] entry in the stats
//! and the scan moves on.

use crate::classify::BoundaryClassifier;
use crate::config::ScanConfig;
use crate::interior::InteriorWallFilter;
use crate::layers::LayerTracer;
use crate::openings::OpeningCollector;
use crate::spatial::SpatialIndex;
use roomscan_geometry::{
    measure_face_extents, meters_to_feet, orientation_of_normal, square_feet_to_square_meters,
    FaceExtents,
};
use roomscan_model::{
    BoundaryInfo, DiagnosticLog, DocumentId, ElementId, ElementInfo, Error, ModelProvider,
    Orientation, Result, Space, SpaceVolume,
};
use serde::Serialize;

/// The pipeline step during which a host element failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureStage {
    /// Enumerating a space's bounding faces.
    SpaceFaces,
    /// Looking up the host element behind a subface.
    Resolve,
    /// Collecting hosted openings.
    Openings,
    /// Tracing the wall layer stack.
    Layers,
}

/// One isolated per-host failure. The run continues past these.
#[derive(Debug, Clone, Serialize)]
pub struct HostFailure {
    pub element: ElementId,
    pub document: DocumentId,
    pub stage: FailureStage,
    pub reason: String,
}

/// Run-level counters, serialized into the diagnostics sidecar.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanStats {
    pub spaces_processed: usize,
    pub subfaces_seen: usize,
    pub exterior_faces: usize,
    pub exterior_area_m2: f64,
    pub boundaries_written: usize,
    pub failures: Vec<HostFailure>,
}

/// Output of one scan: the measured spaces plus the run counters.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub spaces: Vec<Space>,
    pub stats: ScanStats,
}

pub struct EnvelopeScanner<'a> {
    provider: &'a dyn ModelProvider,
    log: &'a dyn DiagnosticLog,
    config: ScanConfig,
}

impl<'a> EnvelopeScanner<'a> {
    pub fn new(
        provider: &'a dyn ModelProvider,
        log: &'a dyn DiagnosticLog,
        config: ScanConfig,
    ) -> Self {
        Self {
            provider,
            log,
            config,
        }
    }

    /// Runs the full envelope scan over every placed space.
    ///
    /// Fatal only when the model exposes no spaces at all; everything else
    /// degrades to per-host failure entries in the returned stats.
    pub fn run(&self) -> Result<ScanReport> {
        let volumes = self.provider.spaces()?;
        if volumes.is_empty() {
            return Err(Error::NoSpaces);
        }

        let index = SpatialIndex::build(&volumes);
        let classifier = BoundaryClassifier::new(
            &index,
            self.log,
            meters_to_feet(self.config.classify_offset_m),
        );
        let interior = InteriorWallFilter::new(
            &index,
            self.log,
            meters_to_feet(self.config.interior_step_m),
        );
        let openings = OpeningCollector::new(self.provider, &index, self.log, &self.config);
        let layers = LayerTracer::new(self.provider, self.log, &self.config);

        let mut stats = ScanStats::default();
        let mut spaces = Vec::with_capacity(volumes.len());

        for (i, volume) in volumes.iter().enumerate() {
            let verbose = i < self.config.detail_space_count;
            let boundaries = self.scan_space(
                volume,
                &classifier,
                &interior,
                &openings,
                &layers,
                &mut stats,
                verbose,
            );

            stats.spaces_processed += 1;
            stats.boundaries_written += boundaries.len();
            spaces.push(Space {
                id: volume.id,
                name: volume.name.clone(),
                number: volume.number.clone(),
                area: square_feet_to_square_meters(volume.area),
                boundaries,
            });
        }

        self.log.info(
            None,
            &format!(
                "scanned {} spaces: {} exterior faces ({:.1} m2), {} boundary records, {} host failures",
                stats.spaces_processed,
                stats.exterior_faces,
                stats.exterior_area_m2,
                stats.boundaries_written,
                stats.failures.len()
            ),
        );

        Ok(ScanReport { spaces, stats })
    }

    #[allow(clippy::too_many_arguments)]
    fn scan_space(
        &self,
        volume: &SpaceVolume,
        classifier: &BoundaryClassifier<'_>,
        interior: &InteriorWallFilter<'_>,
        openings: &OpeningCollector<'_>,
        layers: &LayerTracer<'_>,
        stats: &mut ScanStats,
        verbose: bool,
    ) -> Vec<BoundaryInfo> {
        let mut records = Vec::new();

        let faces = match self.provider.boundary_faces(volume.id) {
            Ok(faces) => faces,
            Err(err) => {
                self.log.warning(
                    None,
                    &format!(
                        "space {}: boundary face enumeration failed: {err}",
                        volume.number
                    ),
                );
                stats.failures.push(HostFailure {
                    element: volume.id,
                    document: DocumentId::MAIN,
                    stage: FailureStage::SpaceFaces,
                    reason: err.to_string(),
                });
                return records;
            }
        };

        for face in &faces {
            for subface in &face.subfaces {
                stats.subfaces_seen += 1;

                let sample = subface.face.origin;
                // Degenerate normals are skipped without comment; clipping
                // produces the occasional zero-area shard
                let outward = match classifier.resolve_outward(
                    volume.id,
                    &sample,
                    &subface.face.normal,
                ) {
                    Some(outward) => outward,
                    None => continue,
                };
                if !classifier.is_exterior(volume.id, &sample, &outward) {
                    continue;
                }

                let extents = measure_face_extents(&subface.face, self.config.min_extent_m);
                if extents.is_suppressed() {
                    continue;
                }
                stats.exterior_faces += 1;
                stats.exterior_area_m2 += extents.area;

                let orientation = if extents.is_horizontal {
                    Orientation::NotApplicable
                } else {
                    orientation_of_normal(&outward, self.config.true_north)
                };

                let host = match &subface.host {
                    Some(host) => host,
                    None => {
                        records.push(free_boundary(&extents, orientation));
                        continue;
                    }
                };

                let info = match self.provider.element(host.document, host.element) {
                    Ok(info) => info,
                    Err(err) => {
                        stats.failures.push(HostFailure {
                            element: host.element,
                            document: host.document,
                            stage: FailureStage::Resolve,
                            reason: err.to_string(),
                        });
                        continue;
                    }
                };

                if !info.category.is_wall_like() || extents.is_horizontal {
                    records.push(host_boundary(&info, &extents, orientation));
                    continue;
                }

                // Shared partitions between two rooms belong to neither
                // envelope: the step-outward probe lands in a neighbor space
                // and the wall (with its openings) is dropped here.
                let bounds = self.provider.element_bounds(host.document, host.element);
                if let Some(center_doc) = info.center(bounds.as_ref()) {
                    let center_main = host.to_main.transform_point(&center_doc);
                    if interior.is_interior_wall(volume, &center_main, &outward) {
                        if verbose {
                            self.log.info(
                                Some(&self.provider.document_name(host.document)),
                                &format!(
                                    "space {}: wall {} is an interior partition, skipped",
                                    volume.number, host.element
                                ),
                            );
                        }
                        continue;
                    }
                }

                match layers.trace_layers(host, &sample, &outward) {
                    Ok(hits) => {
                        // Each layer is measured from its own outer face,
                        // not the clipped subface: stacked layers can differ
                        // in height and width.
                        let mut measured = 0usize;
                        for hit in &hits {
                            let outer_main = hit.outer_face.transformed(&host.to_main);
                            let layer_extents =
                                measure_face_extents(&outer_main, self.config.min_extent_m);
                            if layer_extents.is_suppressed() {
                                continue;
                            }
                            records.push(host_boundary(&hit.info, &layer_extents, orientation));
                            measured += 1;
                        }
                        if measured == 0 {
                            records.push(host_boundary(&info, &extents, orientation));
                        }
                    }
                    Err(err) => {
                        stats.failures.push(HostFailure {
                            element: host.element,
                            document: host.document,
                            stage: FailureStage::Layers,
                            reason: err.to_string(),
                        });
                        records.push(host_boundary(&info, &extents, orientation));
                    }
                }

                match openings.collect_with_fallback(host, &outward, volume.id, orientation) {
                    Ok(mut found) => records.append(&mut found),
                    Err(err) => stats.failures.push(HostFailure {
                        element: host.element,
                        document: host.document,
                        stage: FailureStage::Openings,
                        reason: err.to_string(),
                    }),
                }
            }
        }

        if verbose {
            self.log.info(
                None,
                &format!(
                    "space {} \"{}\": {} boundary records",
                    volume.number,
                    volume.name,
                    records.len()
                ),
            );
        }

        records
    }
}

fn free_boundary(extents: &FaceExtents, orientation: Orientation) -> BoundaryInfo {
    BoundaryInfo {
        host: None,
        category: None,
        family: String::new(),
        type_name: String::new(),
        extent_a: extents.extent_a,
        extent_b: extents.extent_b,
        area: extents.area,
        orientation,
    }
}

fn host_boundary(info: &ElementInfo, extents: &FaceExtents, orientation: Orientation) -> BoundaryInfo {
    BoundaryInfo {
        host: Some(info.id),
        category: Some(info.category),
        family: info.family.clone(),
        type_name: info.type_name.clone(),
        extent_a: extents.extent_a,
        extent_b: extents.extent_b,
        area: extents.area,
        orientation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serialize_for_diagnostics_sidecar() {
        let stats = ScanStats {
            spaces_processed: 2,
            subfaces_seen: 14,
            exterior_faces: 5,
            exterior_area_m2: 41.25,
            boundaries_written: 7,
            failures: vec![HostFailure {
                element: ElementId(99),
                document: DocumentId::MAIN,
                stage: FailureStage::Openings,
                reason: "opening query failed".to_string(),
            }],
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["spaces_processed"], 2);
        assert_eq!(json["failures"][0]["stage"], "Openings");
        assert_eq!(json["failures"][0]["reason"], "opening query failed");
    }

    #[test]
    fn free_boundary_record_has_no_host_labels() {
        let extents = FaceExtents {
            extent_a: 2.5,
            extent_b: 1.0,
            area: 2.5,
            is_horizontal: false,
        };
        let record = free_boundary(&extents, Orientation::South);
        assert!(record.host.is_none());
        assert!(record.category.is_none());
        assert_eq!(record.label(), "FreeBoundary");
        assert_eq!(record.orientation, Orientation::South);
    }
}
