//! Hierarchical dataset path keys.
//!
//! Datasets are addressed by `/`-separated namespaced strings mirroring the
//! reference library layout. Import-source catalogs live under
//! [`MATERIAL_IMPORTS_PREFIX`], one dataset per publication (the path name
//! carries a `ByMass`/`ByCost` tag used for sourcing-basis filtering).

/// Root namespace for every dataset this toolkit consumes.
pub const DATASET_ROOT: &str = "EmbodiedSuffering";

/// Namespace holding the per-country labour-risk datasets.
pub const LABOUR_RISK_PREFIX: &str = "EmbodiedSuffering/LabourExploitationRisk";

/// ITUC Global Rights Index release backing the freedom-of-association table.
pub const ITUC_GLOBAL_RIGHTS_2021: &str =
    "EmbodiedSuffering/LabourExploitationRisk/2021ITUCGlobalRightsIndex";

/// Global Slavery Index release backing the slavery-prevalence table.
pub const GLOBAL_SLAVERY_INDEX_2018: &str =
    "EmbodiedSuffering/LabourExploitationRisk/2018GlobalSlaveryIndex";

/// Namespace holding the material import-source catalogs.
pub const MATERIAL_IMPORTS_PREFIX: &str = "EmbodiedSuffering/Material Imports";
