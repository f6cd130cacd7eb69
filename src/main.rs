use std::path::PathBuf;

use center_atlas::io::csv_export::EXPORT_FILE_NAME;
use center_atlas::pipeline;
use center_atlas::viz::MapOptions;
use center_atlas::{AtlasError, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Map(args) => execute_map(args),
        Command::Export(args) => execute_export(args),
    }
}

fn execute_map(args: MapArgs) -> Result<()> {
    for input in [&args.cdn, &args.kindercare] {
        if !input.exists() {
            return Err(AtlasError::MissingInput(input.clone()));
        }
    }

    let options = MapOptions {
        page_width: args.page_width,
        cluster_enabled: args.clusters,
        cluster_step: args.cluster_step,
    };
    pipeline::build_map(&args.cdn, &args.kindercare, &args.output, &options)
}

fn execute_export(args: ExportArgs) -> Result<()> {
    if !args.kindercare.exists() {
        return Err(AtlasError::MissingInput(args.kindercare));
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    pipeline::export_kindercare(&args.kindercare, &output)
}

fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("center_atlas=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| AtlasError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Reconcile childcare-center location exports into one map."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the combined map specification from both brand workbooks.
    Map(MapArgs),
    /// Export the Kindercare location table as CSV.
    Export(ExportArgs),
}

#[derive(clap::Args)]
struct MapArgs {
    /// CDN location workbook.
    #[arg(long)]
    cdn: PathBuf,

    /// Kindercare location workbook.
    #[arg(long)]
    kindercare: PathBuf,

    /// Output path for the map specification JSON.
    #[arg(long)]
    output: PathBuf,

    /// Enable marker clustering.
    #[arg(long)]
    clusters: bool,

    /// Cluster aggregation step.
    #[arg(long, default_value_t = 2)]
    cluster_step: u32,

    /// Width of the rendering surface in pixels.
    #[arg(long, default_value_t = 1600)]
    page_width: u32,
}

#[derive(clap::Args)]
struct ExportArgs {
    /// Kindercare location workbook.
    #[arg(long)]
    kindercare: PathBuf,

    /// Output CSV path.
    #[arg(long)]
    output: Option<PathBuf>,
}
