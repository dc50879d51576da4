// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Roomscan Pipeline
//!
//! The room-envelope extraction pipeline: walks each space's bounding
//! geometry, classifies every bounding face as interior or exterior against
//! a spatial index of all spaces, measures true planar extents, traces wall
//! layer stacks outward, collects hosted openings, and assembles per-space
//! boundary records for export.
//!
//! Single-threaded and synchronous; a run either completes or returns an
//! error. One misbehaving host element never aborts a run — per-host
//! failures are recorded in [`ScanStats`] and processing continues.

pub mod classify;
pub mod config;
pub mod export;
pub mod interior;
pub mod layers;
pub mod openings;
pub mod orchestrator;
pub mod spatial;

pub use classify::BoundaryClassifier;
pub use config::ScanConfig;
pub use export::{export, tabulate, SpreadsheetWriter, EXPORT_HEADER};
pub use interior::InteriorWallFilter;
pub use layers::{LayerHit, LayerTracer};
pub use openings::OpeningCollector;
pub use orchestrator::{EnvelopeScanner, FailureStage, HostFailure, ScanReport, ScanStats};
pub use spatial::{ContainmentQuery, SpatialIndex};
