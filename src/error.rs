//! Error handling for the aggregation pipeline.
//!
//! Every failure in this crate is unrecoverable at the point of detection:
//! the pipeline never retries or degrades, it surfaces the error and the
//! binary exits non-zero.

use thiserror::Error;

/// A specialized `Result` type for aggregation operations.
///
/// Used throughout the crate for any operation that can fail. Equivalent to
/// `std::result::Result<T, BrcError>`.
pub type Result<T> = std::result::Result<T, BrcError>;

/// Error types for the aggregation pipeline.
///
/// Usage errors (wrong argument count) are not represented here: they are
/// detected and reported by the argument parser at the binary boundary,
/// before the pipeline runs.
#[derive(Error, Debug)]
pub enum BrcError {
    /// I/O error while opening, sizing, or memory-mapping the input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input contained no records, so there is nothing to report.
    ///
    /// Raised by the reporter when the merged map has zero entries, which
    /// covers both an empty file and a file holding only an unterminated
    /// line fragment.
    #[error("no records in input")]
    EmptyInput,
}
