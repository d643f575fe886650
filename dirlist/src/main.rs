//! Snapshot the current working directory into `output/pformat.txt`.
//!
//! Takes no arguments and reads no configuration: running the binary performs
//! the full ensure-directory → list → render → write pipeline against the
//! process's current working directory.

use anyhow::{Context, Result};
use tracing::debug;

use dirlist::dump::dump_listing;
use dirlist::logging;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cwd = std::env::current_dir().context("resolve current working directory")?;
    let report = dump_listing(&cwd)?;
    debug!(
        entries = report.entry_count,
        path = %report.listing_path.display(),
        "dump complete"
    );
    Ok(())
}
