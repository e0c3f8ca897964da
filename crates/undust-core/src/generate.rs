//! Candidate emission: applies the transformation catalogs to a decomposed
//! URL at one or more directory depths.

use std::io::{self, Write};

use crate::catalog::{Catalog, PATTERN_PLACEHOLDER};
use crate::config::RunOptions;
use crate::url_model::DecomposedUrl;

/// Emits every catalog mutation of `stem`/`ext` under one `base_url`.
///
/// Order is fixed: extension suffixes, then prefix symbols, then wrap
/// patterns, each with the bare-stem line before its with-extension line.
/// Returns the number of candidates written.
pub fn emit_for_base<W: Write>(
    out: &mut W,
    base_url: &str,
    stem: &str,
    ext: Option<&str>,
    query_suffix: &str,
    catalog: &Catalog,
) -> io::Result<u64> {
    let mut written = 0u64;

    for value in &catalog.extensions {
        writeln!(out, "{base_url}{stem}.{value}{query_suffix}")?;
        written += 1;
        if let Some(ext) = ext {
            writeln!(out, "{base_url}{stem}.{ext}.{value}{query_suffix}")?;
            written += 1;
        }
    }

    for symbol in &catalog.symbols {
        writeln!(out, "{base_url}{symbol}{stem}{query_suffix}")?;
        written += 1;
        if let Some(ext) = ext {
            writeln!(out, "{base_url}{symbol}{stem}.{ext}{query_suffix}")?;
            written += 1;
        }
    }

    for pattern in &catalog.patterns {
        let wrapped = pattern.replace(PATTERN_PLACEHOLDER, stem);
        writeln!(out, "{base_url}{wrapped}{query_suffix}")?;
        written += 1;
        if let Some(ext) = ext {
            let wrapped = pattern.replace(PATTERN_PLACEHOLDER, &format!("{stem}.{ext}"));
            writeln!(out, "{base_url}{wrapped}{query_suffix}")?;
            written += 1;
        }
    }

    Ok(written)
}

/// Runs the emission sequence for `decomposed` at each requested directory
/// depth and returns the total number of candidates written.
///
/// With `all_dirs` off (or no directories) there is a single pass at the
/// endpoint's own directory. With it on, the first pass runs at the host
/// root, then one more per ancestor prefix down to the full directory chain.
pub fn generate<W: Write>(
    out: &mut W,
    decomposed: &DecomposedUrl,
    stem: &str,
    ext: Option<&str>,
    options: &RunOptions,
    catalog: &Catalog,
) -> io::Result<u64> {
    let query_suffix = match decomposed.query.as_deref() {
        Some(query) if !options.strip_query => format!("?{query}"),
        _ => String::new(),
    };

    if !options.all_dirs || decomposed.directories.is_empty() {
        return emit_for_base(
            out,
            &decomposed.directory_url,
            stem,
            ext,
            &query_suffix,
            catalog,
        );
    }

    let mut written = emit_for_base(
        out,
        &decomposed.scheme_host_root,
        stem,
        ext,
        &query_suffix,
        catalog,
    )?;
    let mut base = decomposed.scheme_host_root.clone();
    for dir in &decomposed.directories {
        base.push_str(dir);
        base.push('/');
        written += emit_for_base(out, &base, stem, ext, &query_suffix, catalog)?;
    }
    Ok(written)
}
