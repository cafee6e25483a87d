//! Host-constructed context owning the provider and the lazy risk tables.
//!
//! Built once and passed by reference into the scorers, replacing hidden
//! process-wide caches. Each table is populated on first use and reused for
//! the lifetime of the context; `OnceLock` guards the initialization so at
//! most one population happens even under concurrent access.

use std::sync::OnceLock;

use tracing::debug;

use crate::paths::{GLOBAL_SLAVERY_INDEX_2018, ITUC_GLOBAL_RIGHTS_2021};
use crate::provider::DatasetProvider;
use crate::tables::CountryRiskTable;

#[derive(Debug)]
pub struct ReferenceContext<P> {
    provider: P,
    freedom_of_association: OnceLock<CountryRiskTable>,
    slavery_victims: OnceLock<CountryRiskTable>,
}

impl<P: DatasetProvider> ReferenceContext<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            freedom_of_association: OnceLock::new(),
            slavery_victims: OnceLock::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Freedom-of-association ratings keyed by country, from the 2021 ITUC
    /// Global Rights Index dataset. Loaded on first call.
    pub fn ituc_freedom_of_association(&self) -> &CountryRiskTable {
        self.freedom_of_association.get_or_init(|| {
            let records = self.provider.labour_risk_records(ITUC_GLOBAL_RIGHTS_2021);
            let table = CountryRiskTable::freedom_of_association(&records);
            debug!(
                records = records.len(),
                rated = table.len(),
                "built freedom-of-association table"
            );
            table
        })
    }

    /// Victims-of-modern-slavery counts keyed by country, from the 2018
    /// Global Slavery Index dataset. Loaded on first call.
    pub fn global_slavery_index(&self) -> &CountryRiskTable {
        self.slavery_victims.get_or_init(|| {
            let records = self.provider.labour_risk_records(GLOBAL_SLAVERY_INDEX_2018);
            let table = CountryRiskTable::victims_of_modern_slavery(&records);
            debug!(
                records = records.len(),
                known = table.len(),
                "built slavery-prevalence table"
            );
            table
        })
    }
}
