//! Seed writer entry point.
//!
//! # Responsibility
//! - Generate `<record-count>` placeholder articles into `<output-path>`.
//! - Report success on stdout (exit 0) and any failure on stderr (exit 1).

use article_cli::{fail, parse_args, LogArgs};
use article_core::{run_seed, ExternalStatus, SeedConfig, SeedOverrides};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "article_seed",
    version,
    about = "Generate placeholder article seeds and write them atomically"
)]
struct Cli {
    /// JSON file to create or replace.
    output_path: PathBuf,
    /// Number of articles to generate.
    record_count: usize,
    /// External JSON array merged into the output (default: articles.extra.json next to this binary).
    #[arg(long, value_name = "PATH")]
    extra: Option<PathBuf>,
    /// Do not merge any external file.
    #[arg(long, conflicts_with = "extra")]
    no_extra: bool,
    /// Spaces per JSON nesting level.
    #[arg(long, value_name = "N")]
    indent: Option<usize>,
    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    let cli: Cli = parse_args();
    if let Err(err) = cli.log.init() {
        fail(err);
    }

    let overrides = SeedOverrides {
        extra_path: cli.extra,
        no_extra: cli.no_extra,
        indent: cli.indent,
    };
    let config = match SeedConfig::default().merge(overrides) {
        Ok(config) => config,
        Err(err) => fail(err),
    };

    match run_seed(&cli.output_path, cli.record_count, &config) {
        Ok(report) => {
            match &report.external {
                ExternalStatus::Ignored { path, reason } => {
                    eprintln!("warning: ignoring `{}`: {reason}", path.display());
                }
                ExternalStatus::Merged { skipped, .. } if *skipped > 0 => {
                    eprintln!("warning: skipped {skipped} unusable external entries");
                }
                _ => {}
            }
            println!(
                "{} articles generated and saved to {}",
                report.generated,
                report.output_path.display()
            );
        }
        Err(err) => fail(err),
    }
}
