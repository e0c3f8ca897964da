//! CLI for the undust candidate generator.

mod banner;
mod input;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use undust_core::catalog::Catalog;
use undust_core::config::{self, RunOptions};
use undust_core::outcome::UrlOutcome;
use undust_core::process::process_url;

/// Top-level CLI for the undust candidate generator.
#[derive(Debug, Parser)]
#[command(name = "undust")]
#[command(
    about = "Generate backup/archive filename candidates from known URLs",
    long_about = None
)]
#[command(group = ArgGroup::new("source").required(true).args(["file", "stream"]))]
pub struct Cli {
    /// File containing URLs to process, one per line.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read URLs from stdin as a stream.
    #[arg(short, long)]
    pub stream: bool,

    /// Strip URL query strings from generated candidates.
    #[arg(short = 'Q', long)]
    pub strip_query: bool,

    /// Skip endpoints that have no file extension.
    #[arg(short = 'e', long)]
    pub extension_only: bool,

    /// Skip input URLs longer than N characters (recommended: 400-600).
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Walk back through each parent directory of the URL and generate
    /// archive and backup filename patterns at every level.
    #[arg(short, long)]
    pub all_dirs: bool,

    /// Do not print the banner on startup.
    #[arg(short, long)]
    pub quiet: bool,

    /// Abort the whole run if a URL fails unexpectedly instead of skipping it.
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let catalog = Catalog::with_extras(&cfg.catalog);
        let options = RunOptions {
            strip_query: cli.strip_query,
            extension_only: cli.extension_only,
            max_length: cli.length.or(cfg.max_length),
            all_dirs: cli.all_dirs,
        };

        if !(cli.quiet || cfg.quiet) {
            banner::print_banner();
        }

        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());

        if let Some(path) = &cli.file {
            for url in input::read_url_file(path)? {
                handle_url(&url, &options, &catalog, &mut out, cli.fail_fast)?;
            }
        } else {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("read line from stdin")?;
                let url = line.trim();
                if url.is_empty() {
                    continue;
                }
                handle_url(url, &options, &catalog, &mut out, cli.fail_fast)?;
                // Flush per URL so a piped consumer is not stuck behind the buffer.
                out.flush().context("flush stdout")?;
            }
        }

        out.flush().context("flush stdout")?;
        Ok(())
    }
}

/// Runs one URL through the core pipeline and applies the skip/abort policy.
///
/// Skips are logged and never stop the run. An unexpected failure is logged
/// loudly and skipped too, unless `--fail-fast` asked for the abort.
fn handle_url<W: Write>(
    url: &str,
    options: &RunOptions,
    catalog: &Catalog,
    out: &mut W,
    fail_fast: bool,
) -> Result<()> {
    match process_url(url, options, catalog, out) {
        Ok(UrlOutcome::Generated(count)) => {
            tracing::debug!("generated {} candidates for {}", count, url);
        }
        Ok(UrlOutcome::Skipped(reason)) => {
            tracing::warn!("skipped {} ({})", url, reason);
        }
        Err(err) => {
            if fail_fast {
                return Err(err.context(format!("processing {url}")));
            }
            tracing::error!("processing {} failed: {:#}", url, err);
        }
    }
    Ok(())
}
