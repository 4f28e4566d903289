use clap::Parser;
use std::path::PathBuf;

mod error;
mod patch;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "openapi-server-patch")]
#[command(about = "Inject the BAMOE Canvas server entry into an OpenAPI spec", long_about = None)]
struct Cli {
    /// OpenAPI document to read.
    #[arg(long, default_value = patch::DEFAULT_INPUT)]
    input: PathBuf,

    /// Where the patched document is written.
    #[arg(short = 'o', long, default_value = patch::DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    patch::patch_file(&cli.input, &cli.output)?;

    Ok(())
}
