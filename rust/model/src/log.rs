// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Diagnostic log capability.
//!
//! Every pipeline component takes a log reference at construction instead of
//! reaching for an ambient singleton. The production implementation forwards
//! to `tracing`; tests use [`NullLog`].

/// Leveled diagnostic sink with an optional document-name tag.
///
/// The pipeline only writes to this channel; it never reads back.
pub trait DiagnosticLog: Send + Sync {
    fn info(&self, document: Option<&str>, message: &str);
    fn warning(&self, document: Option<&str>, message: &str);
    fn error(&self, document: Option<&str>, message: &str);
}

/// Forwards diagnostics to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn info(&self, document: Option<&str>, message: &str) {
        match document {
            Some(doc) => tracing::info!(document = doc, "{message}"),
            None => tracing::info!("{message}"),
        }
    }

    fn warning(&self, document: Option<&str>, message: &str) {
        match document {
            Some(doc) => tracing::warn!(document = doc, "{message}"),
            None => tracing::warn!("{message}"),
        }
    }

    fn error(&self, document: Option<&str>, message: &str) {
        match document {
            Some(doc) => tracing::error!(document = doc, "{message}"),
            None => tracing::error!("{message}"),
        }
    }
}

/// Discards all diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLog;

impl DiagnosticLog for NullLog {
    fn info(&self, _document: Option<&str>, _message: &str) {}
    fn warning(&self, _document: Option<&str>, _message: &str) {}
    fn error(&self, _document: Option<&str>, _message: &str) {}
}
