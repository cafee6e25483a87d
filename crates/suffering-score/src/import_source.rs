//! Import-source resolution: pick the applicable breakdown record for a
//! (material, import country, sourcing basis) triple from the catalog.

use std::collections::BTreeMap;

use tracing::debug;

use suffering_datasets::{DatasetProvider, paths::MATERIAL_IMPORTS_PREFIX};
use suffering_model::{
    Country, Diagnostic, DiagnosticCode, Evaluation, ImportBreakdown, Material, SourcingBasis,
};

/// Resolve the import breakdown for `material` imported to `import_country`.
///
/// Catalog paths are filtered by the sourcing-basis tag in their name
/// (`Undefined` keeps every catalog), then the records by material, then by
/// import country; running out of records at any stage is an error naming
/// the stage. Duplicate records for the same triple are merged by summing
/// ratios per export country and dividing by the number of distinct export
/// countries observed, with a warning.
pub fn resolve<P: DatasetProvider>(
    provider: &P,
    material: Material,
    import_country: Country,
    basis: SourcingBasis,
) -> Evaluation<ImportBreakdown> {
    let mut catalog_paths = provider.paths_with_prefix(MATERIAL_IMPORTS_PREFIX);
    if let Some(tag) = basis.path_tag() {
        catalog_paths.retain(|path| path.to_uppercase().contains(tag));
    }

    let records: Vec<ImportBreakdown> = catalog_paths
        .iter()
        .flat_map(|path| provider.import_breakdowns(path))
        .collect();

    if records.is_empty() {
        return Evaluation::failure(Diagnostic::error(
            DiagnosticCode::NoReferenceData,
            "No import source datasets available.",
        ));
    }

    let records: Vec<ImportBreakdown> = records
        .into_iter()
        .filter(|record| record.material == material)
        .collect();

    if records.is_empty() {
        return Evaluation::failure(Diagnostic::error(
            DiagnosticCode::NoReferenceData,
            format!("No import source datasets available for the material type {material}."),
        ));
    }

    let mut records: Vec<ImportBreakdown> = records
        .into_iter()
        .filter(|record| record.import_country == import_country)
        .collect();

    match records.len() {
        0 => Evaluation::failure(Diagnostic::error(
            DiagnosticCode::NoReferenceData,
            format!(
                "No import source datasets available for the import country \
                 {import_country} for the material type {material}."
            ),
        )),
        1 => Evaluation::success(records.remove(0)),
        found => {
            debug!(
                %material,
                %import_country,
                records = found,
                "merging duplicate import-source records"
            );
            let merged = average_records(material, import_country, &records);
            let mut evaluation = Evaluation::success(merged);
            evaluation.push(Diagnostic::warning(
                DiagnosticCode::DuplicateRecordsAveraged,
                format!(
                    "More than one record found for import of material {material} \
                     to the country {import_country}. Average of all available \
                     records returned."
                ),
            ));
            evaluation
        }
    }
}

/// Merge duplicate records: ratios are summed per export country, then each
/// sum is divided by the number of distinct export countries observed. An
/// averaging policy, not a weighted merge.
fn average_records(
    material: Material,
    import_country: Country,
    records: &[ImportBreakdown],
) -> ImportBreakdown {
    let mut summed: BTreeMap<Country, f64> = BTreeMap::new();
    for record in records {
        for (country, ratio) in record.pairs() {
            *summed.entry(country).or_insert(0.0) += ratio;
        }
    }

    let distinct = summed.len() as f64;
    let (export_countries, import_ratios) = summed
        .into_iter()
        .map(|(country, sum)| (country, sum / distinct))
        .unzip();

    ImportBreakdown::new(material, import_country, export_countries, import_ratios)
}
