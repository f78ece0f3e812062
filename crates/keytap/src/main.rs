#![warn(missing_docs)]

//! Entry point for the `keytap` binary.

mod cli;
mod commands;
mod error;

use std::{io, process, thread};

use clap::Parser;
use sendkey::Keyboard;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli {
        log,
        timing,
        command,
    } = Cli::parse();
    let log_spec = log.spec();
    registry()
        .with(logging::env_filter_from_spec(&log_spec))
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .try_init()
        .ok();

    if let Commands::Keys = command {
        for line in commands::key_table() {
            println!("{line}");
        }
        return Ok(());
    }

    let kb = Keyboard::new()?.with_delay(timing.delay);
    if !timing.wait.is_zero() {
        debug!(wait = ?timing.wait, "waiting_before_send");
        thread::sleep(timing.wait);
    }
    commands::execute(&kb, &command)
}
