use anyhow::{Context, Result};
use clap::Parser;
use depclosure_walk::Config;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg);

    let start = Instant::now();

    let result = depclosure_walk::run_closure(cfg)?;
    depclosure_walk::print_files(&mut stdout, &result.files)
        .context("Failed to write file list")?;
    stdout.flush().context("Failed to flush stdout")?;

    info!(
        "Finished in {}ms: {} files reachable from {} entries",
        start.elapsed().as_millis(),
        result.files.len(),
        result.entries
    );

    Ok(())
}
