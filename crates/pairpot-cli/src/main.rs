mod cli;
mod error;
mod logging;
mod xyz;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use clap::Parser;
use pairpot::evaluator::Property;
use pairpot::{LjParams, evaluate};
use tracing::{debug, info};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("pairpot v{} starting up", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!("Setting Rayon global thread pool to {} threads", num_threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| CliError::Argument(format!("failed to build thread pool: {e}")))?;
    }

    // Reject unsupported properties before touching the input.
    let properties = cli
        .properties
        .iter()
        .map(|name| name.parse::<Property>())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let params = resolve_params(&cli)?;
    let positions = xyz::read_xyz(&cli.input)?;
    info!(
        n_particles = positions.len(),
        epsilon = params.epsilon,
        sigma = params.sigma,
        "loaded configuration"
    );

    let result = evaluate(&positions, &params)?;

    for property in &properties {
        match property {
            Property::Energy => println!("energy: {:.10}", result.energy),
            Property::Forces => {
                println!("forces:");
                for (i, f) in result.forces.iter().enumerate() {
                    println!("{i:6} {:16.10} {:16.10} {:16.10}", f.x, f.y, f.z);
                }
            }
        }
    }

    Ok(())
}

fn resolve_params(cli: &Cli) -> Result<LjParams> {
    let mut params = match &cli.params {
        Some(path) => LjParams::load(path)?,
        None => LjParams::default(),
    };
    if let Some(epsilon) = cli.epsilon {
        params.epsilon = epsilon;
    }
    if let Some(sigma) = cli.sigma {
        params.sigma = sigma;
    }
    Ok(params)
}
