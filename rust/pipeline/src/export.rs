// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tabular export.
//!
//! The scan result flattens into one spreadsheet table: a header row, then
//! per space one summary row followed by one row per boundary record. The
//! actual sink (workbook, CSV file, UI grid) is behind [`SpreadsheetWriter`].

use roomscan_model::{Result, Space};

/// Column headers of the export table.
pub const EXPORT_HEADER: [&str; 7] = [
    "Space",
    "Area [m2]",
    "Boundary",
    "A [m]",
    "B [m]",
    "Area [m2]",
    "Orientation",
];

/// Receives the finished table. One call per export.
pub trait SpreadsheetWriter {
    fn write(&mut self, rows: &[Vec<String>]) -> Result<()>;
}

/// Flattens scanned spaces into export rows, header included.
///
/// Space rows carry the first two columns only; boundary rows leave them
/// empty so the grouping reads naturally in a spreadsheet. Numbers are
/// rendered with two decimals.
pub fn tabulate(spaces: &[Space]) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(1 + spaces.iter().map(|s| 1 + s.boundaries.len()).sum::<usize>());
    rows.push(EXPORT_HEADER.iter().map(|h| h.to_string()).collect());

    for space in spaces {
        rows.push(vec![
            space.label(),
            format!("{:.2}", space.area),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ]);
        for boundary in &space.boundaries {
            rows.push(vec![
                String::new(),
                String::new(),
                boundary.label(),
                format!("{:.2}", boundary.extent_a),
                format!("{:.2}", boundary.extent_b),
                format!("{:.2}", boundary.area),
                boundary.orientation.to_string(),
            ]);
        }
    }

    rows
}

/// Tabulates `spaces` and hands the rows to `writer`.
pub fn export(spaces: &[Space], writer: &mut dyn SpreadsheetWriter) -> Result<()> {
    writer.write(&tabulate(spaces))
}
