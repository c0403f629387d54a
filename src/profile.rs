//! Wall-nearest profile extraction from scattered near-wall samples
//!
//! The raw input is a 3-d point cloud collapsed onto the x-y plane:
//! every streamwise station appears many times, once per spanwise
//! position, and the rows arrive in no particular order. This module
//! reduces the cloud to one entry per station, the sample closest to
//! the wall, with velocities averaged over the homogeneous direction.
use crate::error::{ProcessError, Result};
use crate::Real;
use log::warn;
use std::collections::HashMap;

/// One raw sample of the time-averaged flow field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Streamwise position x/h
    pub x: Real,
    /// Wall-normal position y/h
    pub y: Real,
    /// Mean streamwise velocity
    pub u: Real,
    /// Mean Reynolds shear stress u'v'
    pub uv: Real,
}

/// Wall-nearest entry of one streamwise station
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Streamwise position x/h
    pub x: Real,
    /// Height of the wall-nearest sample (first fluid point)
    pub y: Real,
    /// Mean velocity, averaged over all samples tied at the minimum y
    pub u_avg: Real,
    /// Mean Reynolds shear stress, averaged like `u_avg`
    pub uv_avg: Real,
}

/// Reduce a near-wall sample cloud to one wall-nearest point per
/// streamwise station, sorted by x.
///
/// Stations are identified by exact equality of the stored x
/// coordinate; no tolerance is applied, so rows only merge when the
/// export wrote bit-identical positions. Samples with `u == 0` are
/// ghost entries of the immersed boundary and are never selected as
/// the nearest point. All samples tied at the exact minimum height of
/// a station contribute to the average of u and u'v'.
///
/// # Errors
/// [`ProcessError::EmptyStation`] if a station holds only ghost
/// entries.
pub fn wall_nearest_profile(samples: &[Sample]) -> Result<Vec<ProfilePoint>> {
    // Group by bit pattern; ordering is recovered by the final sort.
    let mut stations: HashMap<u64, Vec<&Sample>> = HashMap::new();
    for sample in samples {
        stations.entry(sample.x.to_bits()).or_default().push(sample);
    }

    let mut points = Vec::with_capacity(stations.len());
    for (bits, group) in stations {
        let x = f64::from_bits(bits);
        points.push(nearest_point(x, &group)?);
    }
    points.sort_by(|a, b| a.x.total_cmp(&b.x));

    // Distinct bit patterns can still compare equal (0.0 vs -0.0); the
    // entry closer to the wall wins.
    let mut deduped: Vec<ProfilePoint> = Vec::with_capacity(points.len());
    for point in points {
        if let Some(last) = deduped.last_mut() {
            if last.x == point.x {
                warn!("repeated entry for x = {}", point.x);
                if point.y < last.y {
                    *last = point;
                }
                continue;
            }
        }
        deduped.push(point);
    }
    Ok(deduped)
}

/// Wall-nearest entry of a single station
fn nearest_point(x: Real, group: &[&Sample]) -> Result<ProfilePoint> {
    let mut y_min: Option<Real> = None;
    for sample in group.iter().filter(|s| s.u != 0.0) {
        match y_min {
            Some(m) if sample.y >= m => {}
            _ => y_min = Some(sample.y),
        }
    }
    let y_min = y_min.ok_or(ProcessError::EmptyStation { x })?;

    let mut u_sum = 0.0;
    let mut uv_sum = 0.0;
    let mut count = 0usize;
    for sample in group.iter().filter(|s| s.u != 0.0 && s.y == y_min) {
        u_sum += sample.u;
        uv_sum += sample.uv;
        count += 1;
    }
    let n = count as Real;
    Ok(ProfilePoint {
        x,
        y: y_min,
        u_avg: u_sum / n,
        uv_avg: uv_sum / n,
    })
}
