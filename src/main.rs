//! CLI entry point for the grid artwork generator

use artgrid::io::cli::{Cli, GenerationRunner};
use clap::Parser;

fn main() -> artgrid::Result<()> {
    let cli = Cli::parse();
    let runner = GenerationRunner::new(cli);
    runner.run()
}
