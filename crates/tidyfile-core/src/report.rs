//! Per-operation results and batch reports.

use serde::{Deserialize, Serialize};

use crate::Operation;

/// Outcome of executing one [`Operation`].
///
/// Carries the operation as requested so callers can trace a result back to
/// its request without positional bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult {
    /// The operation as requested.
    pub operation: Operation,
    /// Whether the operation succeeded.
    pub success: bool,
    /// Error description when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl OperationResult {
    /// Record a success.
    pub fn ok(operation: Operation) -> Self {
        Self {
            operation,
            success: true,
            error: None,
        }
    }

    /// Record a failure.
    pub fn failed(operation: Operation, error: impl Into<String>) -> Self {
        Self {
            operation,
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Structured outcome of a batch run.
///
/// `results` is in the same order as the input operations, so callers may
/// zip results back against their request list by index. Counts are always
/// derived from the results, never tracked separately, so
/// `successful + failed == total == results.len()` holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Number of input operations.
    pub total: usize,
    /// Number of operations that succeeded.
    pub successful: usize,
    /// Number of operations that failed.
    pub failed: usize,
    /// Per-operation results, in input order.
    pub results: Vec<OperationResult>,
}

impl BatchReport {
    /// Build a report from per-operation results, tallying the counts.
    pub fn from_results(results: Vec<OperationResult>) -> Self {
        let successful = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            successful,
            failed: results.len() - successful,
            results,
        }
    }

    /// Check if every operation succeeded.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Iterate over the failed results.
    pub fn failures(&self) -> impl Iterator<Item = &OperationResult> {
        self.results.iter().filter(|r| !r.success)
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!("{} operation(s) completed", self.successful)
        } else {
            format!("{} of {} operation(s) failed", self.failed, self.total)
        }
    }
}
