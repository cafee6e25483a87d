#![deny(unsafe_code)]

//! Reference dataset access for the embodied-suffering metrics toolkit:
//! the [`DatasetProvider`] seam, CSV loading, country risk tables and the
//! lazily-populated [`ReferenceContext`].

pub mod context;
pub mod csv;
pub mod error;
pub mod paths;
pub mod provider;
pub mod tables;

pub use context::ReferenceContext;
pub use csv::CsvDatasetProvider;
pub use error::DatasetError;
pub use provider::{DatasetProvider, InMemoryProvider};
pub use tables::CountryRiskTable;
