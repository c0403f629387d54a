//! Read sample clouds from CSV, write derived tables
//!
//! The input files are mean-flow exports with one row per grid point.
//! Only four named columns are used; any further columns are ignored.
//! Rows are filtered to the near-wall window at ingestion, the rest of
//! the channel never reaches memory.
use crate::error::{ProcessError, Result};
use crate::profile::Sample;
use crate::yplus::YPlusProfile;
use crate::Real;
use serde::Deserialize;
use std::path::Path;

/// Named columns of the mean-flow export
#[derive(Debug, Deserialize)]
struct SampleRecord {
    #[serde(rename = "Points_0")]
    x: Real,
    #[serde(rename = "Points_1")]
    y: Real,
    #[serde(rename = "average_velocity_0")]
    u: Real,
    #[serde(rename = "reynolds_shear_stress_uv")]
    uv: Real,
}

///////////////////////////////////////////////////////////////
//                      Read
///////////////////////////////////////////////////////////////

/// Read all samples with `lo < y < hi` from a CSV export.
///
/// # Errors
/// [`ProcessError::Csv`] on a malformed file or missing column,
/// [`ProcessError::NoSamples`] if the window filters out every row.
pub fn read_samples<P: AsRef<Path>>(path: P, y_window: (Real, Real)) -> Result<Vec<Sample>> {
    let (lo, hi) = y_window;
    let mut reader = csv::Reader::from_path(&path)?;
    let mut samples = Vec::new();
    for record in reader.deserialize() {
        let record: SampleRecord = record?;
        if record.y > lo && record.y < hi {
            samples.push(Sample {
                x: record.x,
                y: record.y,
                u: record.u,
                uv: record.uv,
            });
        }
    }
    if samples.is_empty() {
        return Err(ProcessError::NoSamples {
            path: path.as_ref().display().to_string(),
        });
    }
    Ok(samples)
}

///////////////////////////////////////////////////////////////
//                      Write
///////////////////////////////////////////////////////////////

/// Write a y+ profile as a two-column CSV table
///
/// # Errors
/// [`ProcessError::Csv`] / [`ProcessError::Io`] on write failure.
pub fn write_y_plus<P: AsRef<Path>>(path: P, profile: &YPlusProfile) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&["x", "y_plus"])?;
    for (x, y_plus) in profile.x.iter().zip(profile.y_plus.iter()) {
        writer.write_record(&[x.to_string(), y_plus.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::WallGeometry;
    use crate::profile::ProfilePoint;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("nearwall_{}_{}", std::process::id(), name));
        path
    }

    #[test]
    fn test_read_filters_window() {
        let path = temp_path("read.csv");
        let content = "\
Points_0,Points_1,Points_2,average_velocity_0,reynolds_shear_stress_uv
1.0,0.5,0.0,2.0,0.1
1.0,9.5,0.0,3.0,0.2
2.0,0.0,0.0,4.0,0.3
2.0,1.5,0.0,5.0,0.4
";
        fs::write(&path, content).unwrap();
        let samples = read_samples(&path, (0.0, 9.0)).unwrap();
        fs::remove_file(&path).ok();
        // y = 9.5 is above the window, y = 0.0 is on the wall itself
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].u, 2.0);
        assert_eq!(samples[1].uv, 0.4);
    }

    #[test]
    fn test_read_empty_window_fails() {
        let path = temp_path("empty.csv");
        let content = "\
Points_0,Points_1,average_velocity_0,reynolds_shear_stress_uv
1.0,9.5,2.0,0.1
";
        fs::write(&path, content).unwrap();
        let err = read_samples(&path, (0.0, 9.0)).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ProcessError::NoSamples { .. }));
    }

    #[test]
    fn test_write_y_plus_table() {
        let wall = WallGeometry::new();
        let profile = vec![
            ProfilePoint {
                x: 3.0,
                y: 0.2,
                u_avg: 1.0,
                uv_avg: 0.0,
            },
            ProfilePoint {
                x: 3.5,
                y: 0.2,
                u_avg: 2.0,
                uv_avg: 0.0,
            },
        ];
        let y_plus = YPlusProfile::from_profile(&profile, &wall, 1e-3).unwrap();
        let path = temp_path("write.csv");
        write_y_plus(&path, &y_plus).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("x,y_plus"));
        assert_eq!(lines.count(), 2);
    }
}
