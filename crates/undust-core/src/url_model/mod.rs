//! URL modeling for candidate generation.
//!
//! Splits a raw input URL into the scheme+host root, directory chain,
//! endpoint, and query that the generator mutates.

mod decompose;
mod endpoint;

pub use decompose::decompose;
pub use endpoint::split_endpoint;

/// A raw URL split into the pieces candidate generation works on.
///
/// Built once per input line, never cached, discarded after emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedUrl {
    /// `scheme://host/`, the absolute root used when walking ancestor
    /// directories. Host keeps its port (and userinfo) when present.
    pub scheme_host_root: String,
    /// `scheme://host/dir1/dir2/`, the URL of the endpoint's containing
    /// directory; always ends with `/`.
    pub directory_url: String,
    /// Final path segment with no trailing slash. `None` when the URL points
    /// at the root or a directory and there is no filename to mutate.
    pub endpoint: Option<String>,
    /// Raw query string without the leading `?`.
    pub query: Option<String>,
    /// Path segment names root-to-leaf, excluding the endpoint.
    pub directories: Vec<String>,
}
