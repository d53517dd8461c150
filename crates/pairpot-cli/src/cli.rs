use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "pairpot - evaluates total Lennard-Jones energy and per-particle forces for an XYZ configuration.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input XYZ coordinate file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Optional TOML parameter file with `epsilon` / `sigma` keys.
    #[arg(short, long, value_name = "PATH")]
    pub params: Option<PathBuf>,

    /// Well depth override (energy units); takes precedence over the parameter file.
    #[arg(long, value_name = "VALUE")]
    pub epsilon: Option<f64>,

    /// Length-scale override (distance units); takes precedence over the parameter file.
    #[arg(long, value_name = "VALUE")]
    pub sigma: Option<f64>,

    /// Comma-separated result properties to report.
    #[arg(
        long,
        value_name = "LIST",
        value_delimiter = ',',
        default_values = ["energy", "forces"]
    )]
    pub properties: Vec<String>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,
}
