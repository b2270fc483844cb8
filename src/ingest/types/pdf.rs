use crate::error::{MemeError, Result};
use crate::ingest::grammar;
use crate::quote::Quote;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Poppler's layout-preserving text extractor
pub const PDF_TOOL: &str = "pdftotext";

/// Parse a PDF, one `body - author` quote per extracted line
pub fn parse(path: &Path) -> Result<Vec<Quote>> {
    parse_with_tool(path, PDF_TOOL)
}

/// Parse a PDF using a specific `pdftotext`-compatible executable
///
/// There is no fallback extractor, so a missing tool or a failed run is
/// returned as [`MemeError::ExternalToolError`].
pub fn parse_with_tool(path: &Path, tool: &str) -> Result<Vec<Quote>> {
    let text = extract_text(path, tool)?;
    Ok(grammar::parse_lines(text.lines(), path))
}

/// Run `<tool> -layout <path> -` and capture its standard output
fn extract_text(path: &Path, tool: &str) -> Result<String> {
    debug!("Running {} -layout {} -", tool, path.display());

    let output = Command::new(tool)
        .arg("-layout")
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| MemeError::ExternalToolError {
            tool: tool.to_string(),
            detail: match e.kind() {
                ErrorKind::NotFound => "executable not found on PATH. Install Poppler utils: brew install poppler (macOS) or apt-get install poppler-utils (Linux)".to_string(),
                _ => e.to_string(),
            },
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MemeError::ExternalToolError {
            tool: tool.to_string(),
            detail: format!("{} ({})", stderr.trim(), output.status),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
