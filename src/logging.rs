//! Opt-in file-backed logging. The TUI owns the terminal, so log output
//! goes to a file; verbosity is controlled with RUST_LOG.

use std::path::Path;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
