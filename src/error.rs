//! Crate-wide error type
use thiserror::Error;

/// Result alias with [`ProcessError`]
pub type Result<T> = std::result::Result<T, ProcessError>;

/// Errors raised while post-processing a single case.
///
/// Precondition violations abort the case they occur in; in a multi-file
/// run the remaining cases are unaffected.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// Reynolds number without reference configuration
    #[error("unsupported Reynolds number {0}, available: 5600, 10600, 37000")]
    UnsupportedReynolds(usize),

    /// File list and label list differ in length
    #[error("got {files} data files but {labels} labels, please verify your label names")]
    LabelCountMismatch {
        /// Number of configured input files
        files: usize,
        /// Number of configured display labels
        labels: usize,
    },

    /// A streamwise station holds only zero-velocity (ghost) samples
    #[error("no valid sample left at station x = {x} after removing zero-velocity entries")]
    EmptyStation {
        /// Streamwise coordinate of the offending station
        x: f64,
    },

    /// The averaged velocity never crosses zero inside the search window
    #[error("no sign change of the averaged velocity in {lo} < x < {hi}")]
    NoSignChange {
        /// Lower bound of the search window
        lo: f64,
        /// Upper bound of the search window
        hi: f64,
    },

    /// Modeled wall height lies on or above the first fluid point
    #[error("wall height y0 = {y0} at x = {x} must lie below the first fluid point y1 = {y1}")]
    WallAboveSample {
        /// Streamwise coordinate
        x: f64,
        /// Modeled wall height
        y0: f64,
        /// Height of the wall-nearest sample
        y1: f64,
    },

    /// Input file contains no sample inside the near-wall window
    #[error("no sample inside the near-wall window in {path}")]
    NoSamples {
        /// Offending input file
        path: String,
    },

    /// I/O failure
    #[error("i/o error")]
    Io(#[from] std::io::Error),

    /// Malformed input table
    #[error("csv error")]
    Csv(#[from] csv::Error),
}
