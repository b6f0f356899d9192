use clap::Parser;
use tracing_subscriber::EnvFilter;

use okr_import::{Result, ToolError, convert};

fn main() {
    let _cli = Cli::parse();
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_logging()?;
    let root = std::env::current_dir()?;
    let (objectives, key_results) = convert::run(&root)?;
    println!("Wrote {}", objectives.display());
    println!("Wrote {}", key_results.display());
    Ok(())
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

/// The tool takes no arguments: the input export and both output tables
/// live at fixed locations under the current working directory.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert the OKR spreadsheet export into bulk-import tables."
)]
struct Cli {}
