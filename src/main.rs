use anyhow::Context;
use clap::Parser;
use serde_json::json;
use shapekit::geometry::{lon_lat_to_xyz, mercator};
use shapekit::{grid_in_path, init_logging, interpret, GridOptions, ViewerOptions};
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(
    name = "shapekit",
    version = shapekit::VERSION,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Interpret SVG path data and print the drawing operations as JSON
    Outline {
        /// Path data, as found in the `d` attribute of `<path>`
        data: String,
    },
    /// Print grid samples that fall inside the first subpath of the path data
    Grid {
        data: String,
        /// Steps along x
        #[arg(long, default_value_t = 20)]
        rows: u32,
        /// Steps along y
        #[arg(long, default_value_t = 10)]
        cols: u32,
        /// Flattening tolerance for curves
        #[arg(long, default_value_t = 0.1)]
        tolerance: f64,
    },
    /// Project a longitude/latitude pair (degrees)
    Project {
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Sphere radius for the 3D projection
        #[arg(long, default_value_t = 100.0)]
        radius: f64,
        /// Print the planar Web Mercator projection instead
        #[arg(long)]
        mercator: bool,
    },
    /// Print the resolved viewer options
    Options {
        /// Options file (.json or .toml); defaults to the user config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging()?;

    let output = match args.command {
        Command::Outline { data } => {
            let outline = interpret(&data).context("Failed to interpret path data")?;
            serde_json::to_value(&outline)?
        }
        Command::Grid {
            data,
            rows,
            cols,
            tolerance,
        } => {
            let samples = grid_in_path(&data, tolerance, &GridOptions { rows, cols })?;
            tracing::info!("{} grid samples inside the path", samples.len());
            serde_json::to_value(&samples)?
        }
        Command::Project {
            lon,
            lat,
            radius,
            mercator: planar,
        } => {
            if planar {
                let p = mercator(lon, lat);
                json!({ "x": p.x, "y": p.y })
            } else {
                let v = lon_lat_to_xyz(radius, lon, lat);
                json!({ "x": v.x, "y": v.y, "z": v.z })
            }
        }
        Command::Options { config } => {
            let options = match config {
                Some(path) => ViewerOptions::load_from_file(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => ViewerOptions::load_or_default()?,
            };
            serde_json::to_value(&options)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
