//! Freedom-of-association scoring.
//!
//! Ratings come from the ITUC Global Rights Index (1-6, 6 being the most
//! egregious) and stay on that scale; the weighted mean is never normalized
//! to `[0, 1]`. Countries absent from the reference table are dropped from
//! the mean and reported, not fatal, unless nothing resolves at all.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use suffering_datasets::{CountryRiskTable, DatasetProvider, ReferenceContext};
use suffering_model::{
    Country, Diagnostic, DiagnosticCode, Evaluation, ImportBreakdown, Material, SourcingBasis,
};

use crate::aggregate::{WEIGHT_SUM_TOLERANCE, WeightedEntry, weighted_mean};
use crate::import_source;

/// Freedom-of-association score for a breakdown or an assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreedomScore {
    /// Weighted mean rating on the ITUC 1-6 scale.
    pub value: f64,
    /// Countries that had no rating in the reference table.
    pub unresolved_countries: BTreeSet<Country>,
    /// Share of supplied weight attached to unresolved countries, in `[0, 1]`.
    pub unresolved_fraction: f64,
}

/// Score a single material's import breakdown against a rating table.
///
/// Each (export country, ratio) pair becomes one weighted entry; countries
/// missing from `table` are unresolved and their ratio weight is dropped
/// from the mean.
pub fn score_breakdown(
    table: &CountryRiskTable,
    breakdown: &ImportBreakdown,
) -> Evaluation<FreedomScore> {
    if !breakdown.is_aligned() {
        return Evaluation::failure(Diagnostic::error(
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

    let entries: Vec<WeightedEntry<Country>> = breakdown
        .pairs()
        .map(|(country, ratio)| WeightedEntry::new(country, ratio, table.get(country)))
        .collect();

    weighted_mean(&entries).map(|aggregate| FreedomScore {
        value: aggregate.value,
        unresolved_fraction: aggregate.unresolved_fraction(),
        unresolved_countries: aggregate.unresolved.into_iter().collect(),
    })
}

/// Score a multi-material assembly: per-material scores composed by a second
/// weighted pass using the assembly ratios.
///
/// The composition is a direct weighted mean over the already-computed
/// material scores; each material's own unresolved fraction is weighted by
/// its assembly ratio and summed into the assembly's unresolved fraction,
/// and the unresolved-country sets are unioned. A material whose own score
/// fails entirely fails the assembly.
pub fn score_assembly(
    table: &CountryRiskTable,
    breakdowns: &[ImportBreakdown],
    assembly_ratios: &[f64],
) -> Evaluation<FreedomScore> {
    if breakdowns.len() != assembly_ratios.len() {
        return Evaluation::failure(Diagnostic::error(
            DiagnosticCode::LengthMismatch,
            format!(
                "You must provide the same number of ratios as breakdowns \
                 (got {} breakdowns and {} ratios). Returning no result.",
                breakdowns.len(),
                assembly_ratios.len()
            ),
        ));
    }
    if breakdowns.is_empty() {
        return Evaluation::failure(Diagnostic::error(
            DiagnosticCode::EmptyInput,
            "No breakdowns supplied. Nothing to score.",
        ));
    }
    let total_ratio: f64 = assembly_ratios.iter().sum();
    if total_ratio == 0.0 {
        return Evaluation::failure(Diagnostic::error(
            DiagnosticCode::ZeroTotalWeight,
            "Assembly ratios sum to zero. A weighted mean is undefined.",
        ));
    }

    let mut evaluation = Evaluation {
        outcome: None,
        diagnostics: Vec::new(),
    };

    if (total_ratio - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        evaluation.push(Diagnostic::warning(
            DiagnosticCode::WeightSumDeviation,
            format!(
                "Assembly ratios sum to {total_ratio} rather than 1.0. \
                 The result is normalized against the supplied total."
            ),
        ));
    }

    let mut weighted_value = 0.0;
    let mut weighted_fraction = 0.0;
    let mut unresolved_countries = BTreeSet::new();

    for (breakdown, ratio) in breakdowns.iter().zip(assembly_ratios.iter().copied()) {
        let sub = score_breakdown(table, breakdown);
        match evaluation.absorb(sub) {
            Some(score) => {
                weighted_value += ratio * score.value;
                weighted_fraction += ratio * score.unresolved_fraction;
                unresolved_countries.extend(score.unresolved_countries);
            }
            None => {
                evaluation.push(Diagnostic::error(
                    DiagnosticCode::UnresolvableMaterial,
                    format!(
                        "No freedom-of-association score could be computed for material \
                         {} imported to {}. Assembly score aborted.",
                        breakdown.material, breakdown.import_country
                    ),
                ));
                return evaluation;
            }
        }
    }

    evaluation.outcome = Some(FreedomScore {
        value: weighted_value / total_ratio,
        unresolved_fraction: weighted_fraction / total_ratio,
        unresolved_countries,
    });
    evaluation
}

/// Score an assembly given by materials and ratios, resolving each material
/// to its import breakdown for `import_country` under `basis` first.
///
/// Any material that fails to resolve fails the whole call.
pub fn score_materials<P: DatasetProvider>(
    ctx: &ReferenceContext<P>,
    materials: &[Material],
    assembly_ratios: &[f64],
    import_country: Country,
    basis: SourcingBasis,
) -> Evaluation<FreedomScore> {
    if materials.len() != assembly_ratios.len() {
        return Evaluation::failure(Diagnostic::error(
            DiagnosticCode::LengthMismatch,
            format!(
                "You must provide the same number of ratios as materials \
                 (got {} materials and {} ratios). Returning no result.",
                materials.len(),
                assembly_ratios.len()
            ),
        ));
    }

    let mut evaluation = Evaluation {
        outcome: None,
        diagnostics: Vec::new(),
    };

    let mut breakdowns = Vec::with_capacity(materials.len());
    for material in materials {
        let resolved = import_source::resolve(ctx.provider(), *material, import_country, basis);
        match evaluation.absorb(resolved) {
            Some(breakdown) => breakdowns.push(breakdown),
            None => {
                evaluation.push(Diagnostic::error(
                    DiagnosticCode::UnresolvableMaterial,
                    format!(
                        "Material {material} could not be resolved to an import \
                         breakdown for {import_country}. Returning no result."
                    ),
                ));
                return evaluation;
            }
        }
    }

    let scored = score_assembly(
        ctx.ituc_freedom_of_association(),
        &breakdowns,
        assembly_ratios,
    );
    evaluation.outcome = evaluation.absorb(scored);
    evaluation
}
