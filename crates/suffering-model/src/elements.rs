//! Record types loaded from the reference datasets.

use serde::{Deserialize, Serialize};

use crate::enums::{Country, Material};

/// Per-country labour-risk reference record.
///
/// One row of an ITUC Global Rights Index or Global Slavery Index dataset.
/// `freedom_of_association` is the ITUC rating on a 1-6 scale (6 being the
/// most egregious); 0 means the country is unrated. `victims_of_modern_slavery`
/// is the prevalence in victims per 1000 population; NaN means unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabourRiskRecord {
    pub country: Country,
    pub freedom_of_association: i64,
    pub victims_of_modern_slavery: f64,
    /// Commentary provided by the working population, where collected.
    pub worker_voice: String,
    /// Manufacturer the metrics are associated with, if record-specific.
    pub manufacturer: String,
    /// Material industry the metrics are associated with; `Undefined` for
    /// country-general records.
    pub material: Material,
}

impl LabourRiskRecord {
    /// A country-general record with no worker-voice or manufacturer detail.
    pub fn general(country: Country, freedom_of_association: i64, victims: f64) -> Self {
        Self {
            country,
            freedom_of_association,
            victims_of_modern_slavery: victims,
            worker_voice: String::new(),
            manufacturer: String::new(),
            material: Material::Undefined,
        }
    }
}

/// How one material used in `import_country` is sourced: parallel lists of
/// export countries and the ratio of supply attributed to each.
///
/// The two lists must have equal length. Ratios are not required to sum to
/// 1.0 (real trade tables rarely do exactly), but scorers warn when the sum
/// strays more than 1% from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportBreakdown {
    pub material: Material,
    pub import_country: Country,
    pub export_countries: Vec<Country>,
    pub import_ratios: Vec<f64>,
}

impl ImportBreakdown {
    pub fn new(
        material: Material,
        import_country: Country,
        export_countries: Vec<Country>,
        import_ratios: Vec<f64>,
    ) -> Self {
        Self {
            material,
            import_country,
            export_countries,
            import_ratios,
        }
    }

    /// Number of (country, ratio) pairs. Only meaningful when aligned.
    pub fn len(&self) -> usize {
        self.export_countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.export_countries.is_empty()
    }

    /// True when the country and ratio lists have equal length.
    pub fn is_aligned(&self) -> bool {
        self.export_countries.len() == self.import_ratios.len()
    }

    /// Iterate the (export country, ratio) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (Country, f64)> + '_ {
        self.export_countries
            .iter()
            .copied()
            .zip(self.import_ratios.iter().copied())
    }

    pub fn ratio_sum(&self) -> f64 {
        self.import_ratios.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_alignment_and_pairs() {
        let breakdown = ImportBreakdown::new(
            Material::Timber,
            Country::UnitedStatesOfAmerica,
            vec![Country::Brazil, Country::Vietnam],
            vec![0.5, 0.5],
        );
        assert!(breakdown.is_aligned());
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown.ratio_sum(), 1.0);
        let pairs: Vec<_> = breakdown.pairs().collect();
        assert_eq!(pairs[0], (Country::Brazil, 0.5));
        assert_eq!(pairs[1], (Country::Vietnam, 0.5));
    }

    #[test]
    fn ragged_breakdown_reports_misalignment() {
        let breakdown = ImportBreakdown::new(
            Material::Steel,
            Country::UnitedKingdom,
            vec![Country::China],
            vec![0.6, 0.4],
        );
        assert!(!breakdown.is_aligned());
    }
}
