//! Run configuration
//!
//! A batch run is parameterized by the Reynolds-number regime of the
//! simulation campaign, which fixes the molecular viscosity and carries
//! a default set of case files with matching display labels.
use crate::error::{ProcessError, Result};
use crate::Real;
use std::path::PathBuf;

/// Reynolds-number regimes with reference configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReynoldsNumber {
    /// Re = 5600
    Re5600,
    /// Re = 10600
    Re10600,
    /// Re = 37000
    Re37000,
}

impl ReynoldsNumber {
    /// Typed regime from a plain Reynolds number
    ///
    /// # Errors
    /// [`ProcessError::UnsupportedReynolds`] for any value without a
    /// reference configuration.
    pub fn new(re: usize) -> Result<Self> {
        match re {
            5600 => Ok(Self::Re5600),
            10600 => Ok(Self::Re10600),
            37000 => Ok(Self::Re37000),
            _ => Err(ProcessError::UnsupportedReynolds(re)),
        }
    }

    /// Plain Reynolds number of the regime
    pub fn value(self) -> usize {
        match self {
            Self::Re5600 => 5600,
            Self::Re10600 => 10600,
            Self::Re37000 => 37000,
        }
    }

    /// Kinematic viscosity of the regime (bulk velocity and hill
    /// height are both unity)
    pub fn viscosity(self) -> Real {
        match self {
            Self::Re5600 => 1.78571E-4,
            Self::Re10600 => 9.43396E-5,
            Self::Re37000 => 2.7027E-5,
        }
    }

    /// Default case files and display labels of the regime
    fn default_cases(self) -> (&'static [&'static str], &'static [&'static str]) {
        match self {
            Self::Re5600 => (
                &[
                    "0.025_250K_800s_5600",
                    "0.025_1M_800s_5600",
                    "0.025_4M_800s_5600",
                ],
                &["250K", "1M", "4M"],
            ),
            Self::Re10600 => (
                &[
                    "0.025_120k_800s_10600",
                    "0.025_250k_800s_10600",
                    "0.025_500K_800s_10600",
                ],
                &["120K", "250K", "500K"],
            ),
            Self::Re37000 => (
                &[
                    "0.025_120k_800s_37000",
                    "0.025_250k_800s_37000",
                    "0.025_500K_800s_37000",
                ],
                &["120K", "250K", "500K"],
            ),
        }
    }
}

/// Configuration of one batch run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Reynolds-number regime
    pub re: ReynoldsNumber,
    /// Kinematic viscosity
    pub viscosity: Real,
    /// Case file identifiers, resolved as `<data_dir>/<name>.csv`
    pub file_names: Vec<String>,
    /// Display label per case file
    pub labels: Vec<String>,
    /// Near-wall window: samples with `lo < y < hi` are kept
    pub y_window: (Real, Real),
    /// Search window bracketing the separation bubble
    pub reattachment_window: (Real, Real),
    /// Directory holding the case files
    pub data_dir: PathBuf,
    /// Directory the derived tables are written to
    pub output_dir: PathBuf,
}

impl RunConfig {
    /// Configuration with the default case set of a regime
    ///
    /// # Errors
    /// [`ProcessError::UnsupportedReynolds`] for an unknown Reynolds
    /// number.
    pub fn new(re: usize) -> Result<Self> {
        let re = ReynoldsNumber::new(re)?;
        let (files, labels) = re.default_cases();
        Self::with_cases(
            re.value(),
            files.iter().map(|s| (*s).to_string()).collect(),
            labels.iter().map(|s| (*s).to_string()).collect(),
        )
    }

    /// Configuration with an explicit case set
    ///
    /// # Errors
    /// [`ProcessError::UnsupportedReynolds`] for an unknown Reynolds
    /// number, [`ProcessError::LabelCountMismatch`] if the label list
    /// does not match the file list in length.
    pub fn with_cases(re: usize, file_names: Vec<String>, labels: Vec<String>) -> Result<Self> {
        let re = ReynoldsNumber::new(re)?;
        if file_names.len() != labels.len() {
            return Err(ProcessError::LabelCountMismatch {
                files: file_names.len(),
                labels: labels.len(),
            });
        }
        Ok(Self {
            re,
            viscosity: re.viscosity(),
            file_names,
            labels,
            y_window: (0.0, 9.0),
            reattachment_window: (3.5, 5.2),
            data_dir: PathBuf::from("./data"),
            output_dir: PathBuf::from("./near_wall"),
        })
    }
}
