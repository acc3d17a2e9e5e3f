mod commands;
mod format;
mod writer;

use anyhow::Result;
use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser, Subcommand};
use commands::{
    csv2parquet::Csv2ParquetArgs, head::HeadArgs, info::InfoArgs, merge::MergeArgs,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `PQTOOLS_LOG=debug`.
const LOG_ENV: &str = "PQTOOLS_LOG";

#[derive(Parser)]
#[command(
    name = "parquet-tools",
    version,
    about = "CLI tools for working with Parquet files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the first N rows of a Parquet file
    Head(HeadArgs),
    /// Display metadata and schema information of a Parquet file
    Info(InfoArgs),
    /// Merge the Parquet files of a directory into a single file
    Merge(MergeArgs),
    /// Convert a CSV file to Parquet
    Csv2parquet(Csv2ParquetArgs),
}

fn main() -> Result<()> {
    init_tracing();

    let matches = Cli::command()
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
        .get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    match cli.command {
        Commands::Head(args) => args.run(),
        Commands::Info(args) => args.run(),
        Commands::Merge(args) => args.run(),
        Commands::Csv2parquet(args) => args.run(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
