//! Tests for freedom-of-association scoring, country level and assembly
//! level.

use suffering_datasets::{CountryRiskTable, InMemoryProvider, ReferenceContext, paths};
use suffering_model::{
    Country, DiagnosticCode, ImportBreakdown, LabourRiskRecord, Material, SourcingBasis,
};
use suffering_score::freedom::{score_assembly, score_breakdown, score_materials};

fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

fn rating_table() -> CountryRiskTable {
    [
        (Country::Brazil, 2.0),
        (Country::Vietnam, 4.0),
        (Country::China, 6.0),
        (Country::Sweden, 1.0),
    ]
    .into_iter()
    .collect()
}

fn timber_breakdown() -> ImportBreakdown {
    ImportBreakdown::new(
        Material::Timber,
        Country::UnitedStatesOfAmerica,
        vec![Country::Brazil, Country::Vietnam],
        vec![0.5, 0.5],
    )
}

#[test]
fn breakdown_fully_resolved_is_plain_weighted_mean() {
    let result = score_breakdown(&rating_table(), &timber_breakdown());
    let score = result.outcome.expect("score");
    assert!(approx(score.value, 3.0));
    assert!(score.unresolved_countries.is_empty());
    assert!(approx(score.unresolved_fraction, 0.0));
}

#[test]
fn breakdown_with_unrated_country_drops_its_weight() {
    let breakdown = ImportBreakdown::new(
        Material::Steel,
        Country::UnitedKingdom,
        vec![Country::Brazil, Country::Eritrea],
        vec![0.6, 0.4],
    );
    let result = score_breakdown(&rating_table(), &breakdown);
    assert!(result.has_code(DiagnosticCode::UnresolvedKeysDropped));
    let score = result.outcome.expect("score");
    assert!(approx(score.value, 2.0));
    assert!(score.unresolved_countries.contains(&Country::Eritrea));
    assert!(approx(score.unresolved_fraction, 0.4));
}

#[test]
fn ragged_breakdown_fails_with_length_mismatch() {
    let breakdown = ImportBreakdown::new(
        Material::Steel,
        Country::UnitedKingdom,
        vec![Country::Brazil],
        vec![0.6, 0.4],
    );
    let result = score_breakdown(&rating_table(), &breakdown);
    assert!(result.is_failure());
    assert!(result.has_code(DiagnosticCode::LengthMismatch));
}

#[test]
fn fully_unrated_breakdown_fails() {
    let breakdown = ImportBreakdown::new(
        Material::Stone,
        Country::UnitedKingdom,
        vec![Country::Eritrea, Country::Libya],
        vec![0.5, 0.5],
    );
    let result = score_breakdown(&rating_table(), &breakdown);
    assert!(result.is_failure());
    assert!(result.has_code(DiagnosticCode::AllValuesUnresolved));
}

#[test]
fn assembly_rejects_mismatched_lengths() {
    let result = score_assembly(&rating_table(), &[timber_breakdown()], &[0.5, 0.5]);
    assert!(result.is_failure());
    assert!(result.has_code(DiagnosticCode::LengthMismatch));
}

#[test]
fn assembly_rejects_empty_input() {
    let result = score_assembly(&rating_table(), &[], &[]);
    assert!(result.is_failure());
    assert!(result.has_code(DiagnosticCode::EmptyInput));
}

#[test]
fn assembly_rejects_zero_total_ratio() {
    let breakdowns = vec![timber_breakdown(), timber_breakdown()];
    let result = score_assembly(&rating_table(), &breakdowns, &[0.0, 0.0]);
    assert!(result.is_failure());
    assert!(result.has_code(DiagnosticCode::ZeroTotalWeight));
}

#[test]
fn assembly_composes_scores_and_missing_fractions() {
    // Timber: fully resolved, mean 3.0, fraction 0.
    // Steel: half resolved at 6.0, fraction 0.5.
    let steel = ImportBreakdown::new(
        Material::Steel,
        Country::UnitedStatesOfAmerica,
        vec![Country::China, Country::Eritrea],
        vec![0.5, 0.5],
    );
    let result = score_assembly(&rating_table(), &[timber_breakdown(), steel], &[0.5, 0.5]);
    let score = result.outcome.expect("score");
    assert!(approx(score.value, 4.5));
    assert!(approx(score.unresolved_fraction, 0.25));
    assert_eq!(score.unresolved_countries.len(), 1);
    assert!(score.unresolved_countries.contains(&Country::Eritrea));
}

#[test]
fn assembly_fails_when_one_material_cannot_be_scored() {
    let unscorable = ImportBreakdown::new(
        Material::Stone,
        Country::UnitedStatesOfAmerica,
        vec![Country::Libya],
        vec![1.0],
    );
    let result = score_assembly(
        &rating_table(),
        &[timber_breakdown(), unscorable],
        &[0.5, 0.5],
    );
    assert!(result.is_failure());
    assert!(result.has_code(DiagnosticCode::UnresolvableMaterial));
    assert!(result.has_code(DiagnosticCode::AllValuesUnresolved));
}

fn context_with_catalog() -> ReferenceContext<InMemoryProvider> {
    let mut provider = InMemoryProvider::new();
    provider.insert_labour_risk(
        paths::ITUC_GLOBAL_RIGHTS_2021,
        vec![
            LabourRiskRecord::general(Country::Brazil, 2, f64::NAN),
            LabourRiskRecord::general(Country::Vietnam, 4, f64::NAN),
            LabourRiskRecord::general(Country::China, 6, f64::NAN),
        ],
    );
    provider.insert_import_breakdowns(
        format!("{}/2021ByMass", paths::MATERIAL_IMPORTS_PREFIX),
        vec![
            ImportBreakdown::new(
                Material::Timber,
                Country::UnitedStatesOfAmerica,
                vec![Country::Brazil, Country::Vietnam],
                vec![0.5, 0.5],
            ),
            ImportBreakdown::new(
                Material::Steel,
                Country::UnitedStatesOfAmerica,
                vec![Country::China],
                vec![1.0],
            ),
        ],
    );
    ReferenceContext::new(provider)
}

#[test]
fn materials_resolve_then_score() {
    let ctx = context_with_catalog();
    let result = score_materials(
        &ctx,
        &[Material::Timber, Material::Steel],
        &[0.5, 0.5],
        Country::UnitedStatesOfAmerica,
        SourcingBasis::ByMass,
    );
    let score = result.outcome.expect("score");
    // Timber mean 3.0, steel mean 6.0, equal assembly ratios.
    assert!(approx(score.value, 4.5));
    assert!(approx(score.unresolved_fraction, 0.0));
}

#[test]
fn unresolvable_material_fails_the_whole_call() {
    let ctx = context_with_catalog();
    let result = score_materials(
        &ctx,
        &[Material::Timber, Material::Glass],
        &[0.5, 0.5],
        Country::UnitedStatesOfAmerica,
        SourcingBasis::ByMass,
    );
    assert!(result.is_failure());
    assert!(result.has_code(DiagnosticCode::UnresolvableMaterial));
    assert!(result.has_code(DiagnosticCode::NoReferenceData));
}

#[test]
fn materials_and_ratios_must_align() {
    let ctx = context_with_catalog();
    let result = score_materials(
        &ctx,
        &[Material::Timber],
        &[0.5, 0.5],
        Country::UnitedStatesOfAmerica,
        SourcingBasis::ByMass,
    );
    assert!(result.is_failure());
    assert!(result.has_code(DiagnosticCode::LengthMismatch));
}
