//! Pricing error types.

use thiserror::Error;

/// Errors raised while normalizing external billboard records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The record is not a JSON object.
    #[error("Billboard record must be an object")]
    NotAnObject,

    /// A required field is absent or empty.
    #[error("Billboard record is missing required field: {0}")]
    MissingField(&'static str),

    /// Record at the given position of a batch failed to normalize.
    #[error("Billboard record #{index}: {source}")]
    InBatch {
        /// Zero-based position in the batch.
        index: usize,
        /// Underlying failure.
        #[source]
        source: Box<PricingError>,
    },
}
