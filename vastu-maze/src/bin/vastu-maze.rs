//! Batch driver: generates mazes for a set of maps and compares them
//! against reference mazes.
//!
//! Usage:
//!   vastu-maze generate --config maps/test_config.yaml --granularity 2 --granularity 5
//!   vastu-maze compare --mazes mazes/ --config maps/test_config.yaml --granularity 2

use clap::{Parser, Subcommand};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use vastu_maze::{
    MapSet, StartPolicy, compare_mazes,
    io::{ArtifactNamer, load_maze, save_maze},
};

/// Configuration-space maze generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build mazes for every (map, granularity) pair
    Generate {
        /// Map set file
        #[arg(short, long, default_value = "maps/test_config.yaml")]
        config: PathBuf,

        /// Sampling step (repeatable)
        #[arg(short, long, required = true)]
        granularity: Vec<f32>,

        /// Map names to build (default: all maps in the file)
        #[arg(short, long)]
        map: Vec<String>,

        /// Output directory for maze files
        #[arg(short, long, default_value = "./mazes")]
        output: PathBuf,

        /// Also write numbered copies into this directory
        #[arg(long)]
        artifacts: Option<PathBuf>,

        /// Fail a map whose start configuration collides instead of labeling it anyway
        #[arg(long)]
        reject_colliding_start: bool,
    },

    /// Diff generated mazes against `gt_` reference mazes
    Compare {
        /// Directory holding both generated and reference mazes
        #[arg(long, default_value = "./mazes")]
        mazes: PathBuf,

        /// Map set file (source of map names)
        #[arg(short, long, default_value = "maps/test_config.yaml")]
        config: PathBuf,

        /// Sampling step (repeatable)
        #[arg(short, long, required = true)]
        granularity: Vec<f32>,

        /// Map names to compare (default: all maps in the file)
        #[arg(short, long)]
        map: Vec<String>,
    },
}

type BoxResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let result = match args.command {
        Command::Generate {
            config,
            granularity,
            map,
            output,
            artifacts,
            reject_colliding_start,
        } => generate(
            &config,
            &granularity,
            &map,
            &output,
            artifacts,
            reject_colliding_start,
        ),
        Command::Compare {
            mazes,
            config,
            granularity,
            map,
        } => compare(&mazes, &config, &granularity, &map),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn maze_file_name(map: &str, granularity: f32) -> String {
    format!("{}_granularity_{}.txt", map, granularity)
}

/// Requested map names, or every map in the set.
fn selected_maps(set: &MapSet, requested: &[String]) -> Vec<String> {
    if requested.is_empty() {
        set.names().map(str::to_string).collect()
    } else {
        requested.to_vec()
    }
}

fn generate(
    config_path: &Path,
    granularities: &[f32],
    requested: &[String],
    output: &Path,
    artifacts: Option<PathBuf>,
    reject_colliding_start: bool,
) -> BoxResult<()> {
    let set = MapSet::load(config_path)?;
    let mut transform_config = set.transform.clone();
    if reject_colliding_start {
        transform_config.start_policy = StartPolicy::Reject;
    }

    std::fs::create_dir_all(output)?;
    let mut namer = match artifacts {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            Some(ArtifactNamer::new(dir))
        }
        None => None,
    };

    let mut written = 0usize;
    let mut failed = 0usize;
    for name in selected_maps(&set, requested) {
        let map = match set.get(&name) {
            Ok(map) => map,
            Err(e) => {
                warn!("Skipping {}: {}", name, e);
                failed += 1;
                continue;
            }
        };

        for &granularity in granularities {
            let report = match map.transform(granularity, &transform_config) {
                Ok(report) => report,
                Err(e) => {
                    warn!("{} at granularity {} failed: {}", name, granularity, e);
                    failed += 1;
                    continue;
                }
            };
            if let Some(anomaly) = report.anomaly {
                warn!("{} at granularity {}: {:?}", name, granularity, anomaly);
            }

            let path = output.join(maze_file_name(&name, granularity));
            save_maze(&report.maze, &path)?;
            if let Some(namer) = namer.as_mut() {
                save_maze(&report.maze, &namer.next_path(granularity))?;
            }

            let (rows, cols, layers) = report.maze.dimensions();
            info!(
                "{}: {}x{}x{} ({} free, {} goal) -> {}",
                name,
                rows,
                cols,
                layers,
                report.counts.free,
                report.counts.goal,
                path.display()
            );
            written += 1;
        }
    }

    info!("Wrote {} mazes, {} failed", written, failed);
    Ok(())
}

fn compare(
    mazes: &Path,
    config_path: &Path,
    granularities: &[f32],
    requested: &[String],
) -> BoxResult<()> {
    let set = MapSet::load(config_path)?;

    for name in selected_maps(&set, requested) {
        for &granularity in granularities {
            let file = maze_file_name(&name, granularity);
            let actual_path = mazes.join(&file);
            let expected_path = mazes.join(format!("gt_{}", file));

            let (expected, actual) = match (load_maze(&expected_path), load_maze(&actual_path)) {
                (Ok(expected), Ok(actual)) => (expected, actual),
                (Err(e), _) => {
                    warn!("{}: {}", expected_path.display(), e);
                    continue;
                }
                (_, Err(e)) => {
                    warn!("{}: {}", actual_path.display(), e);
                    continue;
                }
            };

            println!("{} at granularity {}:", name, granularity);
            match compare_mazes(&expected, &actual) {
                Ok(diff) => println!("{}", diff),
                Err(e) => println!("{}", e),
            }
        }
    }
    Ok(())
}
