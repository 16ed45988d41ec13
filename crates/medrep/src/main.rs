//! medrep - Entry Point

use clap::Parser;
use medrep::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    medrep::run(cli).await
}
