// syllabic-cli: shared utilities for the command-line tools.

pub mod report;
pub mod source;
pub mod tally;
pub mod words;

use std::path::PathBuf;
use std::process;

pub use report::{OutputFormat, Report};
pub use source::WordSource;
pub use tally::Tally;

/// Environment variable naming the default word list for `syllable-count`.
pub const WORDLIST_ENV: &str = "SYLLABIC_WORDLIST";

/// Errors raised while reading word lists.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Initialize `env_logger` from the `-v` count. `RUST_LOG` takes precedence.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
