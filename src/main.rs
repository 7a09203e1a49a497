//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `nslookup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Usage text, result output and exit codes
//!
//! All lookup functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;

use nslookup::app::{
    cancel_on_ctrl_c, exit_code_for, write_lines, write_usage, EXIT_INIT_ERROR, EXIT_SUCCESS,
    EXIT_USAGE_ERROR,
};
use nslookup::initialization::init_logger_with;
use nslookup::{run_lookup, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    if let Err(e) = init_logger_with(opt.log_level.clone().into(), opt.log_format.clone()) {
        eprintln!("nslookup error: {e}");
        process::exit(EXIT_INIT_ERROR);
    }

    let transport = opt.transport_config();
    let cancel = CancellationToken::new();
    let _ctrl_c = cancel_on_ctrl_c(cancel.clone());

    let outcome = run_lookup(&transport, &opt.args, &cancel).await;
    cancel.cancel();

    match outcome {
        Ok(lines) => {
            write_lines(&mut io::stdout().lock(), &lines).context("Failed to write results")?;
            Ok(())
        }
        Err(e) => {
            let code = exit_code_for(&e);
            match code {
                EXIT_SUCCESS => {
                    write_usage(&mut io::stdout().lock()).context("Failed to write usage")?;
                }
                EXIT_USAGE_ERROR => {
                    eprintln!("nslookup: {e:#}");
                    write_usage(&mut io::stderr().lock()).context("Failed to write usage")?;
                }
                _ => eprintln!("nslookup error: {e:#}"),
            }
            if code != EXIT_SUCCESS {
                process::exit(code);
            }
            Ok(())
        }
    }
}
