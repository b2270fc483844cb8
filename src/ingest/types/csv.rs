use crate::error::{MemeError, Result};
use crate::quote::Quote;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;
use tracing::{error, warn};

const BODY_COLUMN: &str = "body";
const AUTHOR_COLUMN: &str = "author";

/// Parse a CSV file with `body` and `author` columns
///
/// The table already separates the fields, so rows become quotes directly.
/// An unreadable, empty or malformed file yields no quotes; a missing column
/// is a [`MemeError::SchemaError`].
pub fn parse(path: &Path) -> Result<Vec<Quote>> {
    let mut reader = match ReaderBuilder::new().trim(Trim::Headers).from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            error!("Failed to open CSV file {}: {}", path.display(), e);
            return Ok(Vec::new());
        }
    };

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            error!("Error parsing CSV file {}: {}", path.display(), e);
            return Ok(Vec::new());
        }
    };

    if headers.iter().all(|h| h.is_empty()) {
        error!("CSV file {} is empty or has no data", path.display());
        return Ok(Vec::new());
    }

    let body_idx = column_index(&headers, BODY_COLUMN, path)?;
    let author_idx = column_index(&headers, AUTHOR_COLUMN, path)?;

    // Read everything up front: a structural error anywhere rejects the file
    let records = match reader.records().collect::<csv::Result<Vec<StringRecord>>>() {
        Ok(records) => records,
        Err(e) => {
            error!("Error parsing CSV file {}: {}", path.display(), e);
            return Ok(Vec::new());
        }
    };

    let mut quotes = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        let body = record.get(body_idx).unwrap_or_default().trim();
        let author = record.get(author_idx).unwrap_or_default().trim();

        match Quote::new(body, author) {
            Some(quote) => quotes.push(quote),
            None => warn!(
                "Skipped malformed row {} in {} (body or author missing): {:?}",
                row,
                path.display(),
                record
            ),
        }
    }

    Ok(quotes)
}

fn column_index(headers: &StringRecord, column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| MemeError::SchemaError {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_csv_file_extraction() {
        let file = write_csv("body,author\nChase the mailman,Skittle\n\"When in doubt, go shoe-shopping\",Mr. Paws\n");

        let quotes = parse(file.path()).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].body(), "Chase the mailman");
        assert_eq!(quotes[1].body(), "When in doubt, go shoe-shopping");
        assert_eq!(quotes[1].author(), "Mr. Paws");
    }

    #[test]
    fn test_csv_drops_empty_body_row() {
        let file = write_csv("body,author\nGood boy,Rex\n,Max\n");

        let quotes = parse(file.path()).unwrap();
        assert_eq!(quotes, vec![Quote::new("Good boy", "Rex").unwrap()]);
    }

    #[test]
    fn test_csv_column_order_and_extra_columns() {
        let file = write_csv("id, author ,body\n1,Luna,  Nap hard  \n");

        let quotes = parse(file.path()).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].body(), "Nap hard");
        assert_eq!(quotes[0].author(), "Luna");
    }

    #[test]
    fn test_csv_missing_column() {
        let file = write_csv("quote,who\nGood boy,Rex\n");

        let err = parse(file.path()).unwrap_err();
        match err {
            MemeError::SchemaError { column, .. } => assert_eq!(column, "body"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_csv_empty_file() {
        let file = write_csv("");
        assert!(parse(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_csv_ragged_rows() {
        let file = write_csv("body,author\nGood boy,Rex\nBad,row,here\n");
        assert!(parse(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_csv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(parse(&dir.path().join("missing.csv")).unwrap().is_empty());
    }
}
