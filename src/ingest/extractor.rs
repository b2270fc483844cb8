use crate::error::{MemeError, Result};
use crate::ingest::types::{csv, docx, pdf, txt};
use crate::quote::Quote;
use crate::utils;
use std::fmt;
use std::path::Path;

/// A format-specific quote extractor
///
/// The set of formats is closed, so the supported extensions are known
/// statically and each variant carries no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extractor {
    /// Plain text, one quote per line
    Text,
    /// CSV with `body` and `author` columns
    Csv,
    /// Word document, one quote per paragraph
    Docx,
    /// PDF, via `pdftotext -layout`
    Pdf,
}

impl Extractor {
    /// Every extractor, in dispatch order
    pub const ALL: [Extractor; 4] = [Self::Text, Self::Csv, Self::Docx, Self::Pdf];

    /// Lower-cased extensions this extractor accepts
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Text => &["txt"],
            Self::Csv => &["csv"],
            Self::Docx => &["docx"],
            Self::Pdf => &["pdf"],
        }
    }

    /// Check whether the path's extension belongs to this extractor
    pub fn can_ingest(self, path: &Path) -> bool {
        utils::get_extension(path)
            .is_some_and(|ext| self.allowed_extensions().contains(&ext.as_str()))
    }

    /// Extract quotes from `path`
    pub fn parse(self, path: &Path) -> Result<Vec<Quote>> {
        if !self.can_ingest(path) {
            return Err(MemeError::FormatMismatch {
                path: path.to_path_buf(),
                expected: self.allowed_extensions().join(", ."),
            });
        }

        match self {
            Self::Text => Ok(txt::parse(path)),
            Self::Csv => csv::parse(path),
            Self::Docx => docx::parse(path),
            Self::Pdf => pdf::parse(path),
        }
    }
}

impl fmt::Display for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "TextIngestor",
            Self::Csv => "CsvIngestor",
            Self::Docx => "DocxIngestor",
            Self::Pdf => "PdfIngestor",
        };
        f.write_str(name)
    }
}
