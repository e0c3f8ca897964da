//! Line-oriented URL input sourcing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads a URL list file: one URL per line, surrounding whitespace trimmed,
/// blank lines dropped. Invalid UTF-8 is replaced rather than fatal; URL
/// dumps from other tools are not always clean.
pub fn read_url_file(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).with_context(|| format!("read url file: {}", path.display()))?;
    let contents = String::from_utf8_lossy(&bytes);
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn trims_and_drops_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://x.test/a.php").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   https://x.test/b.php   ").unwrap();
        writeln!(file, "\t").unwrap();

        let urls = read_url_file(file.path()).unwrap();
        assert_eq!(urls, vec!["https://x.test/a.php", "https://x.test/b.php"]);
    }

    #[test]
    fn missing_file_is_an_error_with_the_path() {
        let err = read_url_file(Path::new("/nonexistent/urls.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/urls.txt"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"https://x.test/a.php\n\xff\xfe\nhttps://x.test/b.php\n")
            .unwrap();

        let urls = read_url_file(file.path()).unwrap();
        assert_eq!(urls.len(), 3);
        assert_eq!(urls[0], "https://x.test/a.php");
        assert_eq!(urls[2], "https://x.test/b.php");
    }
}
