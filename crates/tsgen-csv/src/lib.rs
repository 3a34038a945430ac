//! Delimited-text writer for generated time-series data.
//!
//! Serializes a fully generated `Vec<DataPoint>` to a CSV file whose
//! columns are `timestamp,metric,value` followed by every tag key observed
//! anywhere in the data set, lexicographically sorted. Tags a point does
//! not carry render as empty fields.

mod error;
mod writer;

pub use error::CsvWriterError;
pub use writer::{write_csv, WriteMetrics, DEFAULT_BUFFER_SIZE};
