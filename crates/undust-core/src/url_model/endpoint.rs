//! Endpoint stem/extension split.

/// Splits an endpoint into stem and optional extension at the **last** dot.
///
/// A lone leading dot is not an extension separator: `.bak` is a hidden file
/// whose stem is `.bak`, so the stem is never empty. A trailing dot yields no
/// extension either (`main.` → stem `main`).
pub fn split_endpoint(endpoint: &str) -> (&str, Option<&str>) {
    match endpoint.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        Some((stem, ext)) if !stem.is_empty() && ext.is_empty() => (stem, None),
        _ => (endpoint, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_extension() {
        assert_eq!(split_endpoint("main.php"), ("main", Some("php")));
    }

    #[test]
    fn splits_at_last_dot() {
        assert_eq!(split_endpoint("archive.tar.gz"), ("archive.tar", Some("gz")));
    }

    #[test]
    fn no_dot_means_no_extension() {
        assert_eq!(split_endpoint("README"), ("README", None));
    }

    #[test]
    fn hidden_file_keeps_nonempty_stem() {
        assert_eq!(split_endpoint(".bak"), (".bak", None));
        assert_eq!(split_endpoint(".env"), (".env", None));
    }

    #[test]
    fn trailing_dot_is_not_an_extension() {
        assert_eq!(split_endpoint("main."), ("main", None));
        assert_eq!(split_endpoint(".."), (".", None));
    }

    #[test]
    fn hidden_file_with_extension() {
        assert_eq!(split_endpoint(".env.local"), (".env", Some("local")));
    }
}
