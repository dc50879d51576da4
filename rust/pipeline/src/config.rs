// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scan configuration.
//!
//! All thresholds the pipeline uses, with the field defaults matching the
//! values the extraction was originally tuned with. Metric fields end in
//! `_m`; conversion into host units happens at the point of use.

/// Configuration for one envelope scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Minimum planar extent for a boundary record (meters). Faces with a
    /// smaller height or width are suppressed entirely. Default: 0.05.
    pub min_extent_m: f64,

    /// Offset used to probe either side of a candidate face when resolving
    /// the outward normal and testing exterior-ness (meters). Default: 0.05.
    pub classify_offset_m: f64,

    /// Inward offset applied to an opening's center before confirming it
    /// belongs to the current space (meters). Excludes openings that sit on
    /// the wall but serve the room on the other side. Default: 0.15.
    pub opening_inset_m: f64,

    /// Step outward from a wall's center when checking whether it is an
    /// interior partition between two rooms (meters). Default: 1.5.
    pub interior_step_m: f64,

    /// Extrusion depth of the layer-tracing probe solid (meters).
    /// Default: 1.2.
    pub layer_max_depth_m: f64,

    /// Cross-section side length of the layer-tracing probe (meters).
    /// Default: 0.25.
    pub layer_probe_width_m: f64,

    /// Minimum dot product for a candidate layer face to count as parallel
    /// to, and facing along, the outward normal. Default: 0.95.
    pub layer_parallel_dot: f64,

    /// Minimum dot product between wall orientation vectors for the
    /// coplanar-walls-behind fallback. Default: 0.98.
    pub coplanar_parallel_dot: f64,

    /// Maximum outward offset of a coplanar wall behind the host (meters).
    /// Default: 1.2.
    pub coplanar_max_offset_m: f64,

    /// Angle of true north in project plan coordinates, radians clockwise
    /// from the project +Y axis. Default: 0.0 (project north is true north).
    pub true_north: f64,

    /// How many spaces get per-space diagnostic log lines before the
    /// pipeline falls back to the final summary only. Default: 3.
    pub detail_space_count: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_extent_m: 0.05,
            classify_offset_m: 0.05,
            opening_inset_m: 0.15,
            interior_step_m: 1.5,
            layer_max_depth_m: 1.2,
            layer_probe_width_m: 0.25,
            layer_parallel_dot: 0.95,
            coplanar_parallel_dot: 0.98,
            coplanar_max_offset_m: 1.2,
            true_north: 0.0,
            detail_space_count: 3,
        }
    }
}
