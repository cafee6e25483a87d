#![deny(unsafe_code)]

//! Weighted scoring of embodied-suffering metrics.
//!
//! The [`aggregate`] module holds the one general-purpose routine (a
//! normalized weighted mean tracking unresolved entries); [`freedom`] and
//! [`suffering`] apply it to the labour-risk reference tables; and
//! [`import_source`] resolves a material to its breakdown record first.
//!
//! Every operation returns an [`Evaluation`](suffering_model::Evaluation):
//! data-quality problems are structured diagnostics on the result, never
//! panics or `Err`s.

pub mod aggregate;
pub mod freedom;
pub mod import_source;
pub mod suffering;

pub use aggregate::{Aggregate, WEIGHT_SUM_TOLERANCE, WeightedEntry, weighted_mean};
pub use freedom::{FreedomScore, score_assembly, score_breakdown, score_materials};
pub use suffering::SufferingIndex;
