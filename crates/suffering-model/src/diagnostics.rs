//! Structured diagnostics and the evaluation result wrapper.
//!
//! Expected data-quality problems never surface as `Err`: every scoring
//! operation returns an [`Evaluation`] pairing an optional outcome with the
//! diagnostics accumulated while computing it. A failed evaluation has no
//! outcome and at least one error-severity diagnostic; a partial one has an
//! outcome plus warnings describing what was dropped or coerced.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Operation aborted; no outcome was produced.
    Error,
    /// Operation completed but the outcome may be partial.
    Warning,
    /// Informational.
    Note,
}

/// Stable identifier for the condition a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// Parallel input sequences have different lengths.
    LengthMismatch,
    /// No items were supplied at all.
    EmptyInput,
    /// Supplied weights sum to zero; a weighted mean is undefined.
    ZeroTotalWeight,
    /// Every supplied key failed to resolve against the reference table.
    AllValuesUnresolved,
    /// A dataset lookup stage produced no matching records.
    NoReferenceData,
    /// A material could not be resolved to an import breakdown or a score.
    UnresolvableMaterial,
    /// Duplicate catalog records were merged by averaging.
    DuplicateRecordsAveraged,
    /// Supplied weights deviate from 1.0 by more than the tolerance.
    WeightSumDeviation,
    /// Some keys did not resolve; their weight was dropped from the mean.
    UnresolvedKeysDropped,
    /// A not-a-number input value was coerced to zero.
    InvalidValueCoerced,
    /// A value exceeded the acceptable threshold and its entry was removed.
    ThresholdExceeded,
}

/// A recorded error, warning or note accompanying a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn note(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Note,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        };
        write!(f, "{severity}: {}", self.message)
    }
}

/// Outcome of a scoring operation plus everything recorded along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation<T> {
    /// `None` when the operation aborted.
    pub outcome: Option<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Evaluation<T> {
    pub fn success(outcome: T) -> Self {
        Self {
            outcome: Some(outcome),
            diagnostics: Vec::new(),
        }
    }

    pub fn failure(diagnostic: Diagnostic) -> Self {
        Self {
            outcome: None,
            diagnostics: vec![diagnostic],
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn is_failure(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn has_code(&self, code: DiagnosticCode) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }

    /// Transform the outcome while keeping the diagnostics.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Evaluation<U> {
        Evaluation {
            outcome: self.outcome.map(f),
            diagnostics: self.diagnostics,
        }
    }

    /// Fold another evaluation's diagnostics into this one's list and return
    /// its outcome.
    pub fn absorb<U>(&mut self, other: Evaluation<U>) -> Option<U> {
        self.diagnostics.extend(other.diagnostics);
        other.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_has_no_outcome_and_an_error() {
        let eval: Evaluation<f64> = Evaluation::failure(Diagnostic::error(
            DiagnosticCode::EmptyInput,
            "no items supplied",
        ));
        assert!(eval.is_failure());
        assert_eq!(eval.error_count(), 1);
        assert!(eval.has_code(DiagnosticCode::EmptyInput));
    }

    #[test]
    fn absorb_merges_diagnostics() {
        let mut outer = Evaluation::success(1.0);
        let mut inner = Evaluation::success(2.0);
        inner.push(Diagnostic::warning(
            DiagnosticCode::UnresolvedKeysDropped,
            "dropped",
        ));
        let value = outer.absorb(inner);
        assert_eq!(value, Some(2.0));
        assert_eq!(outer.warning_count(), 1);
        assert!(!outer.is_failure());
    }

    #[test]
    fn evaluation_serializes() {
        let mut eval = Evaluation::success(3.0_f64);
        eval.push(Diagnostic::note(
            DiagnosticCode::InvalidValueCoerced,
            "coerced one value",
        ));
        let json = serde_json::to_string(&eval).expect("serialize evaluation");
        let round: Evaluation<f64> = serde_json::from_str(&json).expect("deserialize evaluation");
        assert_eq!(round.outcome, Some(3.0));
        assert_eq!(round.diagnostics.len(), 1);
    }
}
