//! CLI entry point for the rhombus tiling generator

use rhombitile::io::cli::Cli;
use std::io::BufWriter;

fn main() -> rhombitile::Result<()> {
    let cli = Cli::parse_lenient(std::env::args_os());
    let stdout = std::io::stdout().lock();
    cli.run(BufWriter::new(stdout))
}
