//! Vetline CLI - browse, filter and compare AI tools for regulated industries

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{browse, compare, facets, share, show};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Browse(args) => browse::execute(args, &cli.global).await,
        cli::Commands::Show(args) => show::execute(args, &cli.global).await,
        cli::Commands::Compare(args) => compare::execute(args, &cli.global).await,
        cli::Commands::Facets(args) => facets::execute(args, &cli.global).await,
        cli::Commands::Share(args) => share::execute(args, &cli.global).await,
    }
}
