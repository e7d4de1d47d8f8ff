// src/bin/cli.rs
use col_compare::cli;

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
