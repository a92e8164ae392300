//! Console demos of an ordered map: sorted iteration, comparator objects,
//! in-place value updates, key renaming, and key versus value lookup.

mod book;
mod config;
mod demo;
mod error;

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

pub use book::{AuthorName, Book, PagesDescending};
pub use config::{DemoConfig, NO_PAUSE_VAR};
pub use demo::{
    book_catalogs, books, insert_new, pause, print_catalog, print_stocks, stock_chart,
    value_search,
};
pub use error::{DemoError, Result};

/// Logs go to stderr so the demo output on stdout stays exact.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            "warn"
                .parse()
                .map_err(|e| DemoError::Config(format!("Invalid log directive: {e}")))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| DemoError::Config(format!("Logger already set: {e}")))
}

/// Runs `demo` against stdout, then waits for a key press unless disabled.
pub fn run_on_console<F>(config: &DemoConfig, demo: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let mut out = io::stdout().lock();
    demo(&mut out)?;
    out.flush()?;
    if config.pause {
        pause(&mut io::stdin().lock())?;
    }
    Ok(())
}
