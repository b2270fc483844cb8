use crate::error::{MemeError, Result};
use crate::ingest::Extractor;
use crate::quote::Quote;
use std::path::Path;
use tracing::info;

/// Selects the extractor for a file by its extension
#[derive(Debug, Clone)]
pub struct Ingestor {
    extractors: Vec<Extractor>,
}

impl Ingestor {
    /// Create an ingestor with every supported format registered
    pub fn new() -> Self {
        Self::with_extractors(Extractor::ALL)
    }

    /// Create an ingestor over a custom set of extractors, tried in order
    pub fn with_extractors(extractors: impl IntoIterator<Item = Extractor>) -> Self {
        Self {
            extractors: extractors.into_iter().collect(),
        }
    }

    /// Parse quotes from `path` with the first extractor that accepts it
    pub fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        if !path.exists() {
            return Err(MemeError::NotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(MemeError::InvalidTarget {
                path: path.to_path_buf(),
            });
        }

        match self.find_extractor(path) {
            Some(extractor) => {
                info!(
                    "Using {} for {}",
                    extractor,
                    path.file_name().unwrap_or(path.as_os_str()).to_string_lossy()
                );
                extractor.parse(path)
            }
            None => Err(MemeError::UnsupportedFormat {
                path: path.to_path_buf(),
                supported: self.supported_extensions().join(", "),
            }),
        }
    }

    /// Check whether some registered extractor accepts `path`
    pub fn can_ingest(&self, path: &Path) -> bool {
        self.find_extractor(path).is_some()
    }

    /// All extensions handled by the registered extractors, sorted
    pub fn supported_extensions(&self) -> Vec<&'static str> {
        let mut extensions: Vec<&'static str> = self
            .extractors
            .iter()
            .flat_map(|e| e.allowed_extensions().iter().copied())
            .collect();
        extensions.sort_unstable();
        extensions.dedup();
        extensions
    }

    fn find_extractor(&self, path: &Path) -> Option<Extractor> {
        self.extractors.iter().copied().find(|e| e.can_ingest(path))
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_ingest() {
        let ingestor = Ingestor::new();
        assert!(ingestor.can_ingest(Path::new("quotes.csv")));
        assert!(ingestor.can_ingest(Path::new("quotes.TXT")));
        assert!(ingestor.can_ingest(Path::new("quotes.docx")));
        assert!(ingestor.can_ingest(Path::new("quotes.pdf")));
        assert!(!ingestor.can_ingest(Path::new("quotes.xyz")));
        assert!(!ingestor.can_ingest(Path::new("quotes")));
    }

    #[test]
    fn test_supported_extensions() {
        let ingestor = Ingestor::new();
        assert_eq!(ingestor.supported_extensions(), vec!["csv", "docx", "pdf", "txt"]);

        let ingestor = Ingestor::with_extractors([Extractor::Pdf, Extractor::Text, Extractor::Pdf]);
        assert_eq!(ingestor.supported_extensions(), vec!["pdf", "txt"]);
    }

    #[test]
    fn test_parse_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.xyz");
        std::fs::write(&path, "\"Stay loyal\" - Xander\n").unwrap();

        let err = Ingestor::new().parse(&path).unwrap_err();
        match err {
            MemeError::UnsupportedFormat { supported, .. } => {
                assert_eq!(supported, "csv, docx, pdf, txt")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Ingestor::new().parse(&dir.path().join("quotes.txt")).unwrap_err();
        assert!(matches!(err, MemeError::NotFound { .. }));
    }

    #[test]
    fn test_parse_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.txt");
        std::fs::create_dir(&path).unwrap();

        let err = Ingestor::new().parse(&path).unwrap_err();
        assert!(matches!(err, MemeError::InvalidTarget { .. }));
    }

    #[test]
    fn test_parse_dispatches_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DogQuotesTXT.txt");
        std::fs::write(&path, "\"Stay loyal\" - Xander\nnot a quote\n").unwrap();

        let quotes = Ingestor::new().parse(&path).unwrap();
        assert_eq!(quotes, vec![Quote::new("Stay loyal", "Xander").unwrap()]);
    }

    #[test]
    fn test_parse_dispatches_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DogQuotesCSV.csv");
        std::fs::write(&path, "body,author\nGood boy,Rex\n,Max\n").unwrap();

        let quotes = Ingestor::new().parse(&path).unwrap();
        assert_eq!(quotes, vec![Quote::new("Good boy", "Rex").unwrap()]);
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_parse_dispatches_docx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DogQuotesDOCX.docx");
        crate::ingest::types::docx::tests::write_docx(&path, &["Bark like no one is listening - Rex"]);

        let quotes = Ingestor::new().parse(&path).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].author(), "Rex");
    }

    #[test]
    fn test_parse_empty_result_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dummy.txt");
        std::fs::write(&path, "This is a dummy .txt file.\n").unwrap();

        assert!(Ingestor::new().parse(&path).unwrap().is_empty());
    }

    #[test]
    fn test_parse_respects_registered_subset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        std::fs::write(&path, "body,author\nGood boy,Rex\n").unwrap();

        let ingestor = Ingestor::with_extractors([Extractor::Text]);
        assert!(!ingestor.can_ingest(&path));
        let err = ingestor.parse(&path).unwrap_err();
        assert!(err.to_string().ends_with("Supported extensions: txt"));
    }
}
