//! The weighted aggregator: a normalized weighted mean over entries whose
//! values may have failed to resolve.
//!
//! This is the single routine underlying the scoring functions. It never
//! assumes the supplied weights sum to 1: the mean is normalized by the
//! weight that actually carried a resolved value, and the unresolved
//! fraction is normalized by the total weight actually supplied.

use std::fmt;

use suffering_model::{Diagnostic, DiagnosticCode, Evaluation};

/// Tolerated deviation of the supplied weight total from 1.0 before a
/// renormalization warning is recorded.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// One (key, weight, resolvable value) item.
#[derive(Debug, Clone)]
pub struct WeightedEntry<K> {
    pub key: K,
    pub weight: f64,
    /// `None` when the key did not resolve against the reference table.
    pub value: Option<f64>,
}

impl<K> WeightedEntry<K> {
    pub fn new(key: K, weight: f64, value: Option<f64>) -> Self {
        Self { key, weight, value }
    }
}

/// Result of a weighted aggregation.
#[derive(Debug, Clone)]
pub struct Aggregate<K> {
    /// The weight-normalized mean over the resolved entries.
    pub value: f64,
    /// Keys whose values did not resolve, in input order.
    pub unresolved: Vec<K>,
    /// Combined weight of the resolved entries.
    pub used_weight: f64,
    /// Combined weight of the unresolved entries.
    pub dropped_weight: f64,
}

impl<K> Aggregate<K> {
    /// Share of the supplied weight that was dropped, in `[0, 1]`.
    /// Normalized against the weight actually supplied, not an assumed 1.0.
    pub fn unresolved_fraction(&self) -> f64 {
        let total = self.used_weight + self.dropped_weight;
        if total > 0.0 {
            self.dropped_weight / total
        } else {
            0.0
        }
    }
}

/// Compute the weighted mean of `entries`, tracking unresolved keys.
///
/// Fails (no outcome) when the input is empty, when the supplied weights sum
/// to zero, or when no entry resolved at all. Partial resolution succeeds
/// with a warning listing the dropped keys and their weight fraction.
pub fn weighted_mean<K>(entries: &[WeightedEntry<K>]) -> Evaluation<Aggregate<K>>
where
    K: fmt::Display + Clone,
{
    if entries.is_empty() {
        return Evaluation::failure(Diagnostic::error(
            DiagnosticCode::EmptyInput,
            "No weighted entries supplied. Nothing to aggregate.",
        ));
    }

    let total_weight: f64 = entries.iter().map(|entry| entry.weight).sum();
    if total_weight == 0.0 {
        return Evaluation::failure(Diagnostic::error(
            DiagnosticCode::ZeroTotalWeight,
            "Supplied weights sum to zero. A weighted mean is undefined.",
        ));
    }

    let mut used_weight = 0.0;
    let mut dropped_weight = 0.0;
    let mut weighted_sum = 0.0;
    let mut unresolved = Vec::new();

    for entry in entries {
        match entry.value {
            Some(value) => {
                used_weight += entry.weight;
                weighted_sum += entry.weight * value;
            }
            None => {
                dropped_weight += entry.weight;
                unresolved.push(entry.key.clone());
            }
        }
    }

    if used_weight == 0.0 {
        let keys = join_keys(&unresolved);
        return Evaluation::failure(Diagnostic::error(
            DiagnosticCode::AllValuesUnresolved,
            format!("No value resolved for any supplied key ({keys}). Nothing to aggregate."),
        ));
    }

    let aggregate = Aggregate {
        value: weighted_sum / used_weight,
        unresolved,
        used_weight,
        dropped_weight,
    };

    let dropped_warning = if aggregate.unresolved.is_empty() {
        None
    } else {
        let keys = join_keys(&aggregate.unresolved);
        let fraction = aggregate.unresolved_fraction();
        Some(Diagnostic::warning(
            DiagnosticCode::UnresolvedKeysDropped,
            format!(
                "No value resolved for {keys}; their combined weight fraction \
                 {fraction} was dropped from the mean."
            ),
        ))
    };

    let mut evaluation = Evaluation::success(aggregate);

    if (total_weight - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        evaluation.push(Diagnostic::warning(
            DiagnosticCode::WeightSumDeviation,
            format!(
                "Supplied weights sum to {total_weight} rather than 1.0. \
                 The result is normalized against the supplied total."
            ),
        ));
    }

    if let Some(warning) = dropped_warning {
        evaluation.push(warning);
    }

    evaluation
}

fn join_keys<K: fmt::Display>(keys: &[K]) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
