#![allow(clippy::module_inception)]
use crate::cli::cli::Cli;
use crate::core::service;
use crate::logging;
use clap::Parser;

mod cli;

pub fn run() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let rec = service::run()?;
    tracing::debug!(build_id = %rec.build_id, "run finished");
    Ok(())
}
