//! Struct `Sample` represents a batch of reduced training examples,
//! and struct `DataSet` represents raw examples on locations.

// Provides the reduced sample struct.
pub(crate) mod sample_struct;
// Provides the raw data set struct.
pub(crate) mod data_set;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;

/// Provides synthetic data generators.
pub mod synthetic;


pub use sample_reader::DataSetReader;
pub use sample_struct::Sample;
pub use data_set::DataSet;
