//! Reattachment point detection
//!
//! Downstream of the first hill the mean flow separates; where the
//! wall-nearest velocity turns positive again the flow has reattached.
//! The crossing is located by scanning the averaged velocity in x-order
//! and interpolating linearly between the bracketing stations.
use crate::error::{ProcessError, Result};
use crate::profile::ProfilePoint;
use crate::Real;

/// Locate the reattachment point inside the window `lo < x < hi`.
///
/// Scans the profile for the first station with positive averaged
/// velocity and interpolates between it and its (non-positive)
/// predecessor:
///
/// `x_r = x_lo + (-u_lo) / (u_hi - u_lo) * (x_hi - x_lo)`
///
/// The window must bracket the separation bubble so that the first
/// station inside it carries reverse flow.
///
/// # Errors
/// [`ProcessError::NoSignChange`] if no station in the window has
/// positive velocity, or the very first one already does (no bracket
/// exists in either case).
pub fn reattachment_point(
    profile: &[ProfilePoint],
    window: (Real, Real),
) -> Result<Real> {
    let (lo, hi) = window;
    let focussed: Vec<&ProfilePoint> =
        profile.iter().filter(|p| p.x > lo && p.x < hi).collect();

    match focussed.iter().position(|p| p.u_avg > 0.0) {
        Some(i) if i > 0 => {
            let lower = focussed[i - 1];
            let upper = focussed[i];
            let fraction = -lower.u_avg / (upper.u_avg - lower.u_avg);
            Ok(lower.x + fraction * (upper.x - lower.x))
        }
        _ => Err(ProcessError::NoSignChange { lo, hi }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: Real, u_avg: Real) -> ProfilePoint {
        ProfilePoint {
            x,
            y: 0.05,
            u_avg,
            uv_avg: 0.0,
        }
    }

    #[test]
    fn test_interpolated_crossing() {
        let profile = vec![point(0.0, -2.0), point(1.0, -1.0), point(2.0, 1.0), point(3.0, 3.0)];
        let x_r = reattachment_point(&profile, (-1.0, 4.0)).unwrap();
        assert!((x_r - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_no_positive_velocity_fails() {
        let profile = vec![point(4.0, -2.0), point(4.5, -1.0), point(5.0, -0.5)];
        let err = reattachment_point(&profile, (3.5, 5.2)).unwrap_err();
        assert!(matches!(err, ProcessError::NoSignChange { .. }));
    }

    #[test]
    fn test_positive_first_station_fails() {
        // A positive first station leaves no bracket to interpolate in
        let profile = vec![point(4.0, 1.0), point(4.5, 2.0)];
        let err = reattachment_point(&profile, (3.5, 5.2)).unwrap_err();
        assert!(matches!(err, ProcessError::NoSignChange { .. }));
    }

    #[test]
    fn test_window_is_exclusive() {
        // The positive station at the lower bound is outside the
        // window; the crossing is found further downstream.
        let profile = vec![
            point(3.5, 5.0),
            point(4.0, -1.0),
            point(4.5, -0.5),
            point(5.0, 0.5),
        ];
        let x_r = reattachment_point(&profile, (3.5, 5.2)).unwrap();
        assert!((x_r - 4.75).abs() < 1e-12);
    }
}
