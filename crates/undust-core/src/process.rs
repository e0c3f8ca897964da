//! Per-URL pipeline: length gate, decomposition, extension gate, generation.

use std::io::Write;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::config::RunOptions;
use crate::generate::generate;
use crate::outcome::{SkipReason, UrlOutcome};
use crate::url_model::{decompose, split_endpoint};

/// Processes one raw input URL: applies the pre-filters, decomposes it, and
/// writes every candidate to `out`.
///
/// The length gate runs before decomposition, so an over-long URL is never
/// parsed at all. Skips come back in the outcome; the caller owns the
/// diagnostic stream and the continue/abort policy. The only `Err` path is
/// sink I/O.
pub fn process_url<W: Write>(
    raw: &str,
    options: &RunOptions,
    catalog: &Catalog,
    out: &mut W,
) -> Result<UrlOutcome> {
    if let Some(limit) = options.max_length {
        let len = raw.chars().count();
        if len > limit {
            return Ok(UrlOutcome::Skipped(SkipReason::TooLong { len, limit }));
        }
    }

    let decomposed = match decompose(raw) {
        Ok(decomposed) => decomposed,
        Err(reason) => return Ok(UrlOutcome::Skipped(reason)),
    };

    let endpoint = match decomposed.endpoint.as_deref() {
        Some(endpoint) => endpoint,
        None => return Ok(UrlOutcome::Skipped(SkipReason::NoEndpoint)),
    };

    let (stem, ext) = split_endpoint(endpoint);
    if options.extension_only && ext.is_none() {
        return Ok(UrlOutcome::Skipped(SkipReason::ExtensionOnly));
    }

    let written = generate(out, &decomposed, stem, ext, options, catalog)?;
    Ok(UrlOutcome::Generated(written))
}
