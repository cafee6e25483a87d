//! CSV-directory dataset provider.
//!
//! Loads a directory tree laid out to mirror the dataset namespace: the file
//! `<root>/EmbodiedSuffering/LabourExploitationRisk/2021ITUCGlobalRightsIndex.csv`
//! becomes the dataset path
//! `EmbodiedSuffering/LabourExploitationRisk/2021ITUCGlobalRightsIndex`.
//! Everything is parsed eagerly at construction; lookups afterwards are pure
//! map reads.
//!
//! Labour-risk files carry the columns `Country`, `FreedomOfAssociation`,
//! `VictimsOfModernSlavery`, `WorkerVoice`, `Manufacturer`, `Material`.
//! Import-source files carry `Material`, `ImportCountry`, `ExportCountry`,
//! `ImportRatio`; consecutive rows for the same (material, import country)
//! pair form one breakdown.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use suffering_model::{Country, ImportBreakdown, LabourRiskRecord, Material};

use crate::error::DatasetError;
use crate::paths::{LABOUR_RISK_PREFIX, MATERIAL_IMPORTS_PREFIX};
use crate::provider::DatasetProvider;

#[derive(Debug, Clone, Default)]
pub struct CsvDatasetProvider {
    labour_risk: BTreeMap<String, Vec<LabourRiskRecord>>,
    imports: BTreeMap<String, Vec<ImportBreakdown>>,
}

impl CsvDatasetProvider {
    /// Load every `.csv` file under `root` whose dataset path falls in a
    /// recognized namespace. Files outside the known prefixes are ignored.
    pub fn load(root: &Path) -> Result<Self, DatasetError> {
        let mut provider = Self::default();

        for file in list_files_under(root)? {
            let Some(dataset_path) = dataset_path_for(&file) else {
                continue;
            };
            let full_path = root.join(&file);

            if dataset_path.starts_with(LABOUR_RISK_PREFIX) {
                let records = parse_labour_risk_csv(&full_path)?;
                debug!(path = %dataset_path, records = records.len(), "loaded labour-risk dataset");
                provider.labour_risk.insert(dataset_path, records);
            } else if dataset_path.starts_with(MATERIAL_IMPORTS_PREFIX) {
                let breakdowns = parse_import_sources_csv(&full_path)?;
                debug!(
                    path = %dataset_path,
                    breakdowns = breakdowns.len(),
                    "loaded import-source dataset"
                );
                provider.imports.insert(dataset_path, breakdowns);
            } else {
                debug!(path = %dataset_path, "skipping file outside known namespaces");
            }
        }

        Ok(provider)
    }
}

impl DatasetProvider for CsvDatasetProvider {
    fn labour_risk_records(&self, path: &str) -> Vec<LabourRiskRecord> {
        self.labour_risk.get(path).cloned().unwrap_or_default()
    }

    fn import_breakdowns(&self, path: &str) -> Vec<ImportBreakdown> {
        self.imports.get(path).cloned().unwrap_or_default()
    }

    fn paths_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut paths: Vec<String> = self
            .labour_risk
            .keys()
            .chain(self.imports.keys())
            .filter(|path| path.starts_with(prefix))
            .cloned()
            .collect();
        paths.sort();
        paths.dedup();
        paths
    }
}

/// Dataset path for a relative file: `/`-separated, `.csv` suffix stripped.
/// Returns `None` for non-CSV files.
fn dataset_path_for(relative: &Path) -> Option<String> {
    if !relative
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    {
        return None;
    }
    let stem = relative.with_extension("");
    let parts: Vec<String> = stem
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

fn list_files_under(root: &Path) -> Result<BTreeSet<PathBuf>, DatasetError> {
    let mut stack = vec![root.to_path_buf()];
    let mut files = BTreeSet::new();

    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).map_err(|e| DatasetError::io(&dir, e))? {
            let entry = entry.map_err(|e| DatasetError::io(&dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.is_file() {
                let rel = path
                    .strip_prefix(root)
                    .map_err(|e| DatasetError::Csv {
                        path: path.clone(),
                        message: format!("failed to relativize path: {e}"),
                    })?
                    .to_path_buf();
                files.insert(rel);
            }
        }
    }

    Ok(files)
}

/// Read a CSV file into row maps keyed by header, BOM-trimmed and
/// whitespace-trimmed.
fn read_csv_rows(path: &Path) -> Result<Vec<BTreeMap<String, String>>, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| DatasetError::Csv {
            path: path.to_path_buf(),
            message: format!("read csv: {e}"),
        })?;

    let headers = reader
        .headers()
        .map_err(|e| DatasetError::Csv {
            path: path.to_path_buf(),
            message: format!("read headers: {e}"),
        })?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| DatasetError::Csv {
            path: path.to_path_buf(),
            message: format!("read record: {e}"),
        })?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers
                .get(idx)
                .unwrap_or("")
                .trim_matches('\u{feff}')
                .to_string();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

fn get_field(row: &BTreeMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

fn parse_labour_risk_csv(path: &Path) -> Result<Vec<LabourRiskRecord>, DatasetError> {
    let mut records = Vec::new();
    for row in read_csv_rows(path)? {
        let country = parse_country(path, "Country", &get_field(&row, "Country"))?;

        let rating_raw = get_field(&row, "FreedomOfAssociation");
        let freedom_of_association = if rating_raw.is_empty() {
            0
        } else {
            rating_raw
                .parse::<i64>()
                .map_err(|_| DatasetError::InvalidNumber {
                    path: path.to_path_buf(),
                    field: "FreedomOfAssociation",
                    value: rating_raw.clone(),
                })?
        };

        let victims_raw = get_field(&row, "VictimsOfModernSlavery");
        let victims_of_modern_slavery = if victims_raw.is_empty() {
            f64::NAN
        } else {
            victims_raw
                .parse::<f64>()
                .map_err(|_| DatasetError::InvalidNumber {
                    path: path.to_path_buf(),
                    field: "VictimsOfModernSlavery",
                    value: victims_raw.clone(),
                })?
        };

        let material_raw = get_field(&row, "Material");
        let material = if material_raw.is_empty() {
            Material::Undefined
        } else {
            parse_material(path, "Material", &material_raw)?
        };

        records.push(LabourRiskRecord {
            country,
            freedom_of_association,
            victims_of_modern_slavery,
            worker_voice: get_field(&row, "WorkerVoice"),
            manufacturer: get_field(&row, "Manufacturer"),
            material,
        });
    }
    Ok(records)
}

fn parse_import_sources_csv(path: &Path) -> Result<Vec<ImportBreakdown>, DatasetError> {
    let mut breakdowns: Vec<ImportBreakdown> = Vec::new();

    for row in read_csv_rows(path)? {
        let material = parse_material(path, "Material", &get_field(&row, "Material"))?;
        let import_country = parse_country(path, "ImportCountry", &get_field(&row, "ImportCountry"))?;
        let export_country = parse_country(path, "ExportCountry", &get_field(&row, "ExportCountry"))?;

        let ratio_raw = get_field(&row, "ImportRatio");
        let ratio = ratio_raw
            .parse::<f64>()
            .map_err(|_| DatasetError::InvalidNumber {
                path: path.to_path_buf(),
                field: "ImportRatio",
                value: ratio_raw.clone(),
            })?;

        let existing = breakdowns
            .iter_mut()
            .find(|b| b.material == material && b.import_country == import_country);
        match existing {
            Some(breakdown) => {
                breakdown.export_countries.push(export_country);
                breakdown.import_ratios.push(ratio);
            }
            None => breakdowns.push(ImportBreakdown::new(
                material,
                import_country,
                vec![export_country],
                vec![ratio],
            )),
        }
    }

    Ok(breakdowns)
}

fn parse_country(path: &Path, field: &'static str, value: &str) -> Result<Country, DatasetError> {
    value.parse().map_err(|_| DatasetError::UnknownToken {
        path: path.to_path_buf(),
        field,
        value: value.to_string(),
    })
}

fn parse_material(path: &Path, field: &'static str, value: &str) -> Result<Material, DatasetError> {
    value.parse().map_err(|_| DatasetError::UnknownToken {
        path: path.to_path_buf(),
        field,
        value: value.to_string(),
    })
}
