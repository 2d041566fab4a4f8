//! Diagnostic queue for one generation pass.
//!
//! Collects every diagnostic a pass raises, in the order raised, dropping
//! exact duplicates. The pass never stops at the first problem, so the
//! queue is flushed once at the end and reported in full.

use crate::{Diagnostic, ErrorGuaranteed};

/// Queue for collecting diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.push(no_comparable_property("Opaque", span));
/// let guarantee = queue.emit_error(static_target_type("Never", span));
/// let all = queue.flush();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `false` if an identical diagnostic was already queued.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if self.diagnostics.contains(&diag) {
            return false;
        }
        if diag.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Emit an error diagnostic and get proof it was emitted.
    ///
    /// A duplicate of an already queued error still yields the proof, since
    /// the original is in the queue.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        debug_assert!(diag.is_error(), "emit_error called with a warning");
        self.push(diag);
        ErrorGuaranteed::new()
    }

    /// Check if any errors were emitted and get proof if so.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Return all diagnostics in the order raised and clear the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        std::mem::take(&mut self.diagnostics)
    }
}
