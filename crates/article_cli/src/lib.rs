//! Shared plumbing for the article command-line tools.
//!
//! # Responsibility
//! - Parse arguments with the tools' exit-code contract (bad input -> 1).
//! - Wire `--log-level` / `--log-dir` into core logging.

use article_core::{default_log_level, init_logging, LogTarget};
use clap::{Args, Parser};

/// Stderr carries user-facing messages, so only errors are logged there
/// unless the caller asks for more.
pub const STDERR_LOG_LEVEL: &str = "error";

/// Logging flags shared by every binary.
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Log level: trace, debug, info, warn, error or off.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
    /// Absolute directory for rotating log files instead of stderr.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<String>,
}

impl LogArgs {
    /// Starts core logging for this process.
    pub fn init(&self) -> Result<(), String> {
        let (target, fallback_level) = match self.log_dir.as_deref() {
            Some(dir) => (LogTarget::directory(dir)?, default_log_level()),
            None => (LogTarget::Stderr, STDERR_LOG_LEVEL),
        };
        init_logging(self.log_level.as_deref().unwrap_or(fallback_level), target)
    }
}

/// Parses `P` from the process arguments.
///
/// Usage errors exit with status 1; `--help` and `--version` exit with 0.
pub fn parse_args<P: Parser>() -> P {
    match P::try_parse() {
        Ok(parsed) => parsed,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    }
}

/// Prints `Error: <message>` on stderr and exits with status 1.
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
