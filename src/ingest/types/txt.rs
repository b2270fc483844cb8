use crate::ingest::grammar;
use crate::quote::Quote;
use std::io::ErrorKind;
use std::path::Path;
use tracing::error;

/// Parse a plain text file, one `body - author` quote per line
///
/// Unreadable files yield no quotes rather than an error.
pub fn parse(path: &Path) -> Vec<Quote> {
    match std::fs::read_to_string(path) {
        Ok(content) => grammar::parse_lines(content.lines(), path),
        Err(e) => {
            match e.kind() {
                ErrorKind::NotFound => error!("File not found at {}", path.display()),
                ErrorKind::PermissionDenied => {
                    error!("Permission denied when trying to read {}", path.display())
                }
                _ => error!("Failed to read text file {}: {}", path.display(), e),
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_text_file_extraction() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "\"To bork or not to bork\" - Bork").unwrap();
        writeln!(file, "He who smelt it... - Stinky").unwrap();
        file.flush().unwrap();

        let quotes = parse(file.path());
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].body(), "To bork or not to bork");
        assert_eq!(quotes[1].body(), "He who smelt it...");
        assert_eq!(quotes[1].author(), "Stinky");
    }

    #[test]
    fn test_text_file_without_valid_lines() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "This is a dummy .txt file.").unwrap();
        file.flush().unwrap();

        assert!(parse(file.path()).is_empty());
    }

    #[test]
    fn test_text_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(parse(&dir.path().join("missing.txt")).is_empty());
    }

    #[test]
    fn test_text_file_invalid_utf8() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(&[0xff, 0xfe, 0x20, 0x2d, 0x20, 0xff]).unwrap();
        file.flush().unwrap();

        assert!(parse(file.path()).is_empty());
    }
}
