//! Per-URL processing outcome and the skip taxonomy.

use thiserror::Error;

/// Why an input URL produced no candidates. Non-fatal; the processing loop
/// logs the reason and moves on to the next URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// Unparseable input, non-http(s) scheme, or missing host.
    #[error("not a valid http url")]
    NotHttpUrl,
    /// Root or directory URL with no final path segment to mutate.
    #[error("no endpoint to mutate")]
    NoEndpoint,
    /// Extension-only mode is on and the endpoint has no extension.
    #[error("extensions-only enabled")]
    ExtensionOnly,
    /// Raw input is longer than the configured length cap.
    #[error("url length {len} exceeds limit {limit}")]
    TooLong { len: usize, limit: usize },
}

/// Result of processing one input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    /// Candidates were written; holds the number of lines emitted.
    Generated(u64),
    /// Nothing was written. The caller owns the diagnostic stream and the
    /// continue/abort policy, so the reason is carried, not logged here.
    Skipped(SkipReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_reason_messages_match_diagnostics() {
        assert_eq!(SkipReason::NotHttpUrl.to_string(), "not a valid http url");
        assert_eq!(SkipReason::NoEndpoint.to_string(), "no endpoint to mutate");
        assert_eq!(
            SkipReason::ExtensionOnly.to_string(),
            "extensions-only enabled"
        );
        assert_eq!(
            SkipReason::TooLong { len: 700, limit: 600 }.to_string(),
            "url length 700 exceeds limit 600"
        );
    }
}
