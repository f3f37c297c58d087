use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sunplan::commands::{load_config, normalize, summarize};
use sunplan::init_logging;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(name = "sunplan", about = "Building footprint tools for site plans")]
#[command(version, long_version = LONG_VERSION)]
struct Cli {
    /// Settings file (TOML or JSON); defaults to the platform config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print building count, areas, and groups of a building export
    Summary { file: PathBuf },
    /// Re-export a building file through the editor
    Normalize {
        file: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs)?;

    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Summary { file } => {
            let summary = summarize(&file, &config)?;
            println!("{}", summary);
        }
        Command::Normalize { file, output } => {
            let summary = normalize(&file, &output, &config)?;
            println!(
                "Wrote {} building(s) and {} group(s) to {}",
                summary.imported.len(),
                summary.groups.len(),
                output.display()
            );
        }
    }
    Ok(())
}
