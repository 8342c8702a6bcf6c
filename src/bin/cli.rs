// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use xpath_gen::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run().map_err(|e| eyre!("{e}"))
}
