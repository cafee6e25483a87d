//! Suffering-index scoring from enslaved-population counts.
//!
//! Unlike the freedom-of-association mean, the suffering index is an
//! *unnormalized* weighted sum: `sum(count * ratio)` over the surviving
//! entries, never divided by the surviving ratio total. That asymmetry is
//! deliberate and load-bearing.

use serde::{Deserialize, Serialize};

use suffering_datasets::CountryRiskTable;
use suffering_model::{Diagnostic, DiagnosticCode, Evaluation, ImportBreakdown};

/// Suffering index plus the countries excluded while computing it.
///
/// Exclusion lists hold display names rather than enum values so they can be
/// reported to humans directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SufferingIndex {
    /// Unnormalized `sum(count * ratio)` over the surviving entries.
    pub value: f64,
    /// Countries removed outright for exceeding the acceptable threshold.
    pub culled_countries: Vec<String>,
    /// Countries whose count was not-a-number and was coerced to zero.
    pub invalid_countries: Vec<String>,
}

/// Compute the suffering index for a breakdown.
///
/// Countries whose enslaved count exceeds `acceptable_threshold` are removed
/// from consideration entirely (their ratio drops out of the sum, not zeroed
/// in place). Not-a-number counts are coerced to zero but keep their entry.
/// A length mismatch between `enslaved_counts` and the breakdown aborts the
/// call.
pub fn score(
    enslaved_counts: &[f64],
    breakdown: &ImportBreakdown,
    acceptable_threshold: f64,
) -> Evaluation<SufferingIndex> {
    let mut evaluation = match check_lengths(enslaved_counts, breakdown) {
        Ok(()) => Evaluation {
            outcome: None,
            diagnostics: Vec::new(),
        },
        Err(diagnostic) => return Evaluation::failure(diagnostic),
    };

    let mut value = 0.0;
    let mut culled_countries = Vec::new();
    let mut invalid_countries = Vec::new();

    for ((country, ratio), count) in breakdown.pairs().zip(enslaved_counts.iter().copied()) {
        if count > acceptable_threshold {
            culled_countries.push(country.to_string());
            continue;
        }
        let count = if count.is_nan() {
            invalid_countries.push(country.to_string());
            0.0
        } else {
            count
        };
        value += count * ratio;
    }

    if !culled_countries.is_empty() {
        evaluation.push(Diagnostic::warning(
            DiagnosticCode::ThresholdExceeded,
            format!(
                "Enslaved-population count exceeds the acceptable threshold \
                 {acceptable_threshold} for {}. Those countries were excluded \
                 from the index.",
                culled_countries.join(", ")
            ),
        ));
    }
    if !invalid_countries.is_empty() {
        evaluation.push(Diagnostic::warning(
            DiagnosticCode::InvalidValueCoerced,
            format!(
                "Enslaved-population count is not a number for {}. \
                 Those counts were treated as zero.",
                invalid_countries.join(", ")
            ),
        ));
    }

    evaluation.outcome = Some(SufferingIndex {
        value,
        culled_countries,
        invalid_countries,
    });
    evaluation
}

/// Per-country suffering contributions: `count * ratio` for each entry, in
/// breakdown order, with no threshold filtering.
///
/// This preserves the older list-shaped variant of the computation. It
/// aborts on a length mismatch like [`score`] does; not-a-number counts are
/// coerced to zero and noted.
pub fn per_country(enslaved_counts: &[f64], breakdown: &ImportBreakdown) -> Evaluation<Vec<f64>> {
    if let Err(diagnostic) = check_lengths(enslaved_counts, breakdown) {
        return Evaluation::failure(diagnostic);
    }

    let mut evaluation = Evaluation {
        outcome: None,
        diagnostics: Vec::new(),
    };

    let mut coerced = Vec::new();
    let products = breakdown
        .pairs()
        .zip(enslaved_counts.iter().copied())
        .map(|((country, ratio), count)| {
            if count.is_nan() {
                coerced.push(country.to_string());
                0.0
            } else {
                count * ratio
            }
        })
        .collect();

    if !coerced.is_empty() {
        evaluation.push(Diagnostic::note(
            DiagnosticCode::InvalidValueCoerced,
            format!(
                "Enslaved-population count is not a number for {}. \
                 Those contributions were treated as zero.",
                coerced.join(", ")
            ),
        ));
    }

    evaluation.outcome = Some(products);
    evaluation
}

/// Enslaved-population counts for each export country in the breakdown,
/// looked up from a slavery-prevalence table.
///
/// Countries absent from the table yield NaN, which [`score`] and
/// [`per_country`] then coerce to zero and report.
pub fn counts_from_table(table: &CountryRiskTable, breakdown: &ImportBreakdown) -> Vec<f64> {
    breakdown
        .export_countries
        .iter()
        .map(|country| table.get(*country).unwrap_or(f64::NAN))
        .collect()
}

fn check_lengths(enslaved_counts: &[f64], breakdown: &ImportBreakdown) -> Result<(), Diagnostic> {
    if !breakdown.is_aligned() {
        return Err(Diagnostic::error(
            DiagnosticCode::LengthMismatch,
            format!(
                "Breakdown for material {} imported to {} has {} export countries \
                 but {} ratios. Returning no result.",
                breakdown.material,
                breakdown.import_country,
                breakdown.export_countries.len(),
                breakdown.import_ratios.len()
            ),
        ));
    }
    if enslaved_counts.len() != breakdown.import_ratios.len() {
        return Err(Diagnostic::error(
            DiagnosticCode::LengthMismatch,
            format!(
                "The provided list lengths do not correspond: {} enslaved-population \
                 counts against {} import ratios. Returning no result.",
                enslaved_counts.len(),
                breakdown.import_ratios.len()
            ),
        ));
    }
    Ok(())
}
