//! Non-dimensional wall distance y+
//!
//! y+ measures the height of the first grid cell in viscous units and
//! is the standard check whether a mesh resolves the near-wall region.
//! The wall shear stress is approximated by the viscous term only,
//! a finite difference of the averaged velocity between the first
//! fluid point and the modeled wall.
use crate::error::{ProcessError, Result};
use crate::geometry::{WallGeometry, HILL_HEIGHT};
use crate::profile::ProfilePoint;
use crate::Real;
use ndarray::Array1;

/// y+ over the streamwise coordinate, one value per station
#[derive(Debug, Clone)]
pub struct YPlusProfile {
    /// Streamwise stations x/h
    pub x: Array1<Real>,
    /// Non-dimensional wall distance per station
    pub y_plus: Array1<Real>,
}

impl YPlusProfile {
    /// Evaluate y+ for every station of a wall-nearest profile.
    ///
    /// Per station: `y0` from the wall model, cell-center height
    /// `y_cc = (y1 - y0) / 2`, shear stress
    /// `tau = nu * u_avg / (y1 - y0)` and
    /// `y+ = y_cc * sqrt(|tau|) / nu`. The resolved Reynolds stress is
    /// carried on the profile but not part of this estimate.
    ///
    /// # Errors
    /// [`ProcessError::WallAboveSample`] if the modeled wall height
    /// reaches the first fluid point; the two would be geometrically
    /// inconsistent.
    pub fn from_profile(
        profile: &[ProfilePoint],
        wall: &WallGeometry,
        viscosity: Real,
    ) -> Result<Self> {
        let mut x_out = Vec::with_capacity(profile.len());
        let mut y_plus = Vec::with_capacity(profile.len());
        for point in profile {
            let y0 = wall.height(HILL_HEIGHT * point.x) / HILL_HEIGHT;
            let y1 = point.y;
            if y0 >= y1 {
                return Err(ProcessError::WallAboveSample {
                    x: point.x,
                    y0,
                    y1,
                });
            }
            let y_cc = (y1 - y0) / 2.;
            let tau = viscosity * point.u_avg / (y1 - y0);
            x_out.push(point.x);
            y_plus.push(y_cc * tau.abs().sqrt() / viscosity);
        }
        Ok(Self {
            x: Array1::from(x_out),
            y_plus: Array1::from(y_plus),
        })
    }

    /// Number of stations
    pub fn len(&self) -> usize {
        self.y_plus.len()
    }

    /// True if the profile holds no station
    pub fn is_empty(&self) -> bool {
        self.y_plus.is_empty()
    }

    /// Largest y+ of the profile
    pub fn max(&self) -> Real {
        self.y_plus.fold(f64::NEG_INFINITY, |a, &b| a.max(b))
    }

    /// Mean y+ over all stations
    pub fn mean(&self) -> Real {
        self.y_plus.sum() / self.len() as Real
    }
}
