use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dev::cli::Cli;
use dev::dispatcher::Verbosity;
use dev::{AppContext, Dispatcher, ErrorCode, Locations, SystemRunner};

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "DEV_LOG";

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<i32> {
    let request = Cli::parse().into_request();
    init_logging(request.verbosity());

    let locations = Locations::detect().context("Failed to determine working directory")?;
    let ctx = AppContext::load(locations);

    let dispatcher = Dispatcher::new(&ctx, SystemRunner);
    let code = dispatcher.run(&request, &mut io::stdout().lock(), &mut io::stderr().lock());
    Ok(code)
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("dev: {:#}", e);
            ErrorCode::General.code()
        }
    };
    process::exit(code);
}
