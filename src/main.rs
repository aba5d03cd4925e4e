//! CLI entry point for connected texture atlas conversion

use clap::Parser;
use ctmforge::io::cli::{Cli, Converter};

fn main() -> ctmforge::Result<()> {
    let cli = Cli::parse();
    let converter = Converter::new(cli);
    converter.convert().map(drop)
}
