use serde::Serialize;
use std::fmt;

/// A single quote: what was said and who said it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Quote {
    body: String,
    author: String,
}

impl Quote {
    /// Create a quote, rejecting a blank body or author
    pub fn new(body: impl Into<String>, author: impl Into<String>) -> Option<Self> {
        let body = body.into();
        let author = author.into();

        if body.trim().is_empty() || author.trim().is_empty() {
            return None;
        }

        Some(Self { body, author })
    }

    /// The quote text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Who said it
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.body, self.author)
    }
}
