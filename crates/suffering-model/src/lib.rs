#![deny(unsafe_code)]

//! Data model for the embodied-suffering metrics toolkit: country, material
//! and sourcing-basis enumerations, the dataset record types, and the
//! diagnostics carried by every scoring result.

pub mod diagnostics;
pub mod elements;
pub mod enums;

pub use diagnostics::{Diagnostic, DiagnosticCode, Evaluation, Severity};
pub use elements::{ImportBreakdown, LabourRiskRecord};
pub use enums::{Country, Material, SourcingBasis};
