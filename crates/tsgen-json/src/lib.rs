//! Structured-text writer for generated time-series data.
//!
//! Serializes a fully generated `Vec<DataPoint>` as one top-level JSON
//! array of `{timestamp, metric, value, tags}` objects.

mod error;
mod writer;

pub use error::JsonWriterError;
pub use writer::{write_json, WriteMetrics, DEFAULT_BUFFER_SIZE};
