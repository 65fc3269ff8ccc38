// src/main.rs
use anyhow::Result;
use clap::Parser;

use quotefix::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level)
        .format_timestamp(None)
        .init();

    run(args)
}
