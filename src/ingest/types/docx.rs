use crate::error::Result;
use crate::quote::Quote;
use std::path::Path;

/// Parse a Word document, one `body - author` quote per paragraph
///
/// Missing or corrupt documents yield no quotes. Without the `docx` feature
/// this fails with [`crate::error::MemeError::DependencyMissing`].
#[cfg(feature = "docx")]
pub fn parse(path: &Path) -> Result<Vec<Quote>> {
    use crate::ingest::grammar;
    use tracing::error;

    match reader::read_paragraphs(path) {
        Ok(paragraphs) => Ok(grammar::parse_lines(
            paragraphs.iter().map(String::as_str),
            path,
        )),
        Err(e) => {
            error!("Invalid or corrupt DOCX file at {}: {:#}", path.display(), e);
            Ok(Vec::new())
        }
    }
}

#[cfg(not(feature = "docx"))]
pub fn parse(_path: &Path) -> Result<Vec<Quote>> {
    Err(crate::error::MemeError::DependencyMissing {
        dependency: "DOCX".to_string(),
        hint: "rebuild memegen with the `docx` feature enabled".to_string(),
    })
}

#[cfg(feature = "docx")]
mod reader {
    use anyhow::{Context, Result};
    use once_cell::sync::Lazy;
    use regex::{Captures, Regex};
    use std::fs::File;
    use std::io::Read;
    use std::path::Path;
    use zip::ZipArchive;

    const DOCUMENT_PART: &str = "word/document.xml";

    static RE_PARAGRAPH: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?s)<w:p(?:\s[^>]*?)?(?:/>|>(.*?)</w:p>)").unwrap());

    static RE_RUN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|<w:(tab|br|cr)(?:\s[^>]*)?/>").unwrap()
    });

    static RE_ENTITY: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"&(#x[0-9A-Fa-f]+|#[0-9]+|amp|lt|gt|quot|apos);").unwrap());

    /// Read the text of every body paragraph, in document order
    pub fn read_paragraphs(path: &Path) -> Result<Vec<String>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open DOCX file: {}", path.display()))?;

        let mut archive = ZipArchive::new(file)
            .with_context(|| format!("Failed to read DOCX package: {}", path.display()))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .with_context(|| format!("DOCX package has no {}", DOCUMENT_PART))?
            .read_to_string(&mut xml)
            .with_context(|| format!("Failed to read {}", DOCUMENT_PART))?;

        Ok(paragraphs_from_xml(&xml))
    }

    pub(super) fn paragraphs_from_xml(xml: &str) -> Vec<String> {
        RE_PARAGRAPH
            .captures_iter(xml)
            .map(|caps| caps.get(1).map(|m| paragraph_text(m.as_str())).unwrap_or_default())
            .collect()
    }

    fn paragraph_text(inner: &str) -> String {
        let mut text = String::new();
        for caps in RE_RUN.captures_iter(inner) {
            if let Some(run) = caps.get(1) {
                text.push_str(&decode_entities(run.as_str()));
            } else if caps.get(2).map(|m| m.as_str()) == Some("tab") {
                text.push('\t');
            } else {
                text.push(' ');
            }
        }
        text
    }

    fn decode_entities(text: &str) -> String {
        RE_ENTITY
            .replace_all(text, |caps: &Captures| {
                let entity = &caps[1];
                let decoded = match entity {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    _ if entity.starts_with("#x") => u32::from_str_radix(&entity[2..], 16)
                        .ok()
                        .and_then(char::from_u32),
                    _ => entity[1..].parse::<u32>().ok().and_then(char::from_u32),
                };
                decoded.map_or_else(|| caps[0].to_string(), String::from)
            })
            .into_owned()
    }
}
