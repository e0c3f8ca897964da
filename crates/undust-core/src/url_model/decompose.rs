//! Splitting a raw URL into root, directory chain, endpoint, and query.

use url::{Position, Url};

use crate::outcome::SkipReason;

use super::DecomposedUrl;

/// Decomposes a raw input URL.
///
/// Rejects anything that is not an http(s) URL with a host; the rejection is
/// surfaced upstream as a per-URL skip, never an abort. A URL whose path ends
/// in `/` (or has no path segments at all) decomposes with `endpoint: None`.
pub fn decompose(raw: &str) -> Result<DecomposedUrl, SkipReason> {
    let parsed = Url::parse(raw).map_err(|_| SkipReason::NotHttpUrl)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SkipReason::NotHttpUrl);
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(SkipReason::NotHttpUrl);
    }

    let scheme_host_root = format!("{}/", &parsed[..Position::BeforePath]);

    let path = parsed.path();
    let mut segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    // A trailing slash means the last segment is itself a directory.
    let endpoint = if path.ends_with('/') || segments.is_empty() {
        None
    } else {
        segments.pop()
    };
    let directories = segments;

    let directory_url = if directories.is_empty() {
        scheme_host_root.clone()
    } else {
        format!("{}{}/", scheme_host_root, directories.join("/"))
    };

    let query = parsed
        .query()
        .filter(|q| !q.is_empty())
        .map(str::to_string);

    Ok(DecomposedUrl {
        scheme_host_root,
        directory_url,
        endpoint,
        query,
        directories,
    })
}
