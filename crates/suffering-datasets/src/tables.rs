//! Country risk tables built from labour-risk reference records.

use std::collections::BTreeMap;

use suffering_model::{Country, LabourRiskRecord};

/// Immutable country -> risk-scalar mapping.
///
/// Holds either ITUC freedom-of-association ratings (integers 1-6 widened to
/// f64) or slavery-prevalence rates, depending on which constructor built it.
/// Lookups on unmapped countries return `None`; the scorers treat those
/// entries as unresolved rather than failing.
#[derive(Debug, Clone, Default)]
pub struct CountryRiskTable {
    values: BTreeMap<Country, f64>,
}

impl CountryRiskTable {
    pub fn new(values: BTreeMap<Country, f64>) -> Self {
        Self { values }
    }

    /// Build the freedom-of-association table.
    ///
    /// Records with an `Undefined` country or a rating of 0 (unrated) are
    /// skipped. When a country appears more than once the last record wins.
    pub fn freedom_of_association(records: &[LabourRiskRecord]) -> Self {
        let values = records
            .iter()
            .filter(|record| record.country != Country::Undefined)
            .filter(|record| record.freedom_of_association > 0)
            .map(|record| (record.country, record.freedom_of_association as f64))
            .collect();
        Self { values }
    }

    /// Build the slavery-prevalence table.
    ///
    /// Records with an `Undefined` country or an unknown (NaN) prevalence
    /// are skipped.
    pub fn victims_of_modern_slavery(records: &[LabourRiskRecord]) -> Self {
        let values = records
            .iter()
            .filter(|record| record.country != Country::Undefined)
            .filter(|record| !record.victims_of_modern_slavery.is_nan())
            .map(|record| (record.country, record.victims_of_modern_slavery))
            .collect();
        Self { values }
    }

    pub fn get(&self, country: Country) -> Option<f64> {
        self.values.get(&country).copied()
    }

    pub fn contains(&self, country: Country) -> bool {
        self.values.contains_key(&country)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Country, f64)> + '_ {
        self.values.iter().map(|(country, value)| (*country, *value))
    }
}

impl FromIterator<(Country, f64)> for CountryRiskTable {
    fn from_iter<I: IntoIterator<Item = (Country, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrated_and_undefined_records_are_skipped() {
        let records = vec![
            LabourRiskRecord::general(Country::Brazil, 4, 1.8),
            LabourRiskRecord::general(Country::Sweden, 0, 0.1),
            LabourRiskRecord::general(Country::Undefined, 3, 0.5),
        ];
        let table = CountryRiskTable::freedom_of_association(&records);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(Country::Brazil), Some(4.0));
        assert_eq!(table.get(Country::Sweden), None);
    }

    #[test]
    fn nan_prevalence_is_skipped() {
        let records = vec![
            LabourRiskRecord::general(Country::India, 5, 6.1),
            LabourRiskRecord::general(Country::Norway, 1, f64::NAN),
        ];
        let table = CountryRiskTable::victims_of_modern_slavery(&records);
        assert_eq!(table.get(Country::India), Some(6.1));
        assert!(!table.contains(Country::Norway));
    }
}
