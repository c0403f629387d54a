//! Batch driver: derive reattachment point and y+ tables for all
//! configured cases of a Reynolds-number regime.
use log::{error, info};
use nearwall::{
    io, reattachment_point, wall_nearest_profile, RunConfig, WallGeometry, YPlusProfile,
};
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let start = Instant::now();

    let re = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(5600);

    let config = match RunConfig::new(re) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };
    if let Err(err) = std::fs::create_dir_all(&config.output_dir) {
        error!("cannot create {:?}: {}", config.output_dir, err);
        std::process::exit(1);
    }

    info!(
        "Re = {}, nu = {:e}, {} cases",
        config.re.value(),
        config.viscosity,
        config.file_names.len()
    );

    // Cases are independent; a failed one does not block the rest
    let wall = WallGeometry::new();
    for (file_name, label) in config.file_names.iter().zip(config.labels.iter()) {
        if let Err(err) = process_case(&config, &wall, file_name, label) {
            error!("{}: {}", label, err);
        }
    }

    info!("finished in {:.3} s", start.elapsed().as_secs_f64());
}

/// Full derivation of one case file
fn process_case(
    config: &RunConfig,
    wall: &WallGeometry,
    file_name: &str,
    label: &str,
) -> nearwall::Result<()> {
    let path = config.data_dir.join(format!("{}.csv", file_name));
    let samples = io::read_samples(&path, config.y_window)?;
    info!("{}: {} near-wall samples", label, samples.len());

    let profile = wall_nearest_profile(&samples)?;
    let x_r = reattachment_point(&profile, config.reattachment_window)?;
    info!("{}: reattachment point x/h = {}", label, x_r);

    let y_plus = YPlusProfile::from_profile(&profile, wall, config.viscosity)?;
    info!("{}: maximum y+ = {}", label, y_plus.max());
    info!("{}: mean y+ = {}", label, y_plus.mean());

    let out = config.output_dir.join(format!("{}_y_plus.csv", file_name));
    io::write_y_plus(&out, &y_plus)?;
    info!("{}: y+ table written to {:?}", label, out);
    Ok(())
}
