// src/bin/cli.rs
use mention_check::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    mention_check::log::init_stderr();
    cli::run()
}
