#![warn(missing_docs)]
//! # `nearwall`: near-wall post-processing for periodic hill simulations
//!
//! This library extracts two derived quantities from time-averaged CFD
//! data sampled close to the lower wavy wall of a periodic hill channel:
//!
//! - the **reattachment point**, i.e. the streamwise location where the
//!   averaged velocity at the wall-nearest points changes sign from
//!   reverse to forward flow, see [`reattachment_point()`]
//! - the **non-dimensional wall distance** y+, built from a
//!   piecewise-cubic wall geometry model and a viscous estimate of the
//!   wall shear stress, see [`YPlusProfile`]
//!
//! The input is a cloud of (x, y, u, u'v') samples, irregularly spaced
//! and unsorted, as produced by slicing a 3-d mean flow field just above
//! the wall. [`wall_nearest_profile()`] reduces the cloud to one
//! wall-nearest entry per streamwise station, averaging duplicates over
//! the homogeneous direction.
//!
//! Only the unstretched geometry (alpha = 1) is supported.
//!
//! # Example
//! Locate the reattachment point of a synthetic two-station profile:
//! ```
//! use nearwall::{reattachment_point, wall_nearest_profile, Sample};
//!
//! let samples = vec![
//!     Sample { x: 4.0, y: 0.05, u: -1.0, uv: 0.0 },
//!     Sample { x: 4.5, y: 0.05, u: 1.0, uv: 0.0 },
//! ];
//! let profile = wall_nearest_profile(&samples).unwrap();
//! let x_r = reattachment_point(&profile, (3.5, 5.2)).unwrap();
//! assert!((x_r - 4.25).abs() < 1e-12);
//! ```
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod profile;
pub mod reattachment;
pub mod yplus;

pub use config::{ReynoldsNumber, RunConfig};
pub use error::{ProcessError, Result};
pub use geometry::WallGeometry;
pub use profile::{wall_nearest_profile, ProfilePoint, Sample};
pub use reattachment::reattachment_point;
pub use yplus::YPlusProfile;

/// Real type
pub type Real = f64;
