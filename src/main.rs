use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use hitstats::utils::setup_logging;
use hitstats::{analyze_access_log, render, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    // A failed fetch is reported and ends the run normally.
    let lines = match analyze_access_log(&args) {
        Ok(stats) => render(&stats),
        Err(e) => {
            warn!(url = %args.url, error = %e, "Could not fetch access log");
            vec![e.to_string()]
        }
    };

    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{}", line).context("Failed to write report")?;
    }
    Ok(())
}
