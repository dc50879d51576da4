// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Internal-length-unit conversion.
//!
//! The host application stores all lengths in feet. Exported measurements
//! are metric, so every extent and area crosses this boundary exactly once.

/// Meters per internal length unit (international foot).
pub const METERS_PER_FOOT: f64 = 0.3048;

#[inline]
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

#[inline]
pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

#[inline]
pub fn square_feet_to_square_meters(square_feet: f64) -> f64 {
    square_feet * METERS_PER_FOOT * METERS_PER_FOOT
}

#[inline]
pub fn square_meters_to_square_feet(square_meters: f64) -> f64 {
    square_meters / (METERS_PER_FOOT * METERS_PER_FOOT)
}
