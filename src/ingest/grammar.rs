use crate::quote::Quote;
use std::path::Path;
use tracing::warn;

/// Separates the quote body from its author
pub const SEPARATOR: &str = " - ";

/// Parse a single `body - author` line into a quote
///
/// Only the first separator splits, so an author such as `Jean - Luc` stays
/// intact. Surrounding double quotes are stripped from the body, even when
/// unbalanced.
pub fn parse_line(line: &str) -> Option<Quote> {
    let (body, author) = line.split_once(SEPARATOR)?;

    let body = body.trim().trim_matches('"');
    let author = author.trim();

    if body.is_empty() || author.is_empty() {
        return None;
    }

    Quote::new(body, author)
}

/// Parse every non-blank line from `source`, skipping those that don't match
pub fn parse_lines<'a, I>(lines: I, source: &Path) -> Vec<Quote>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut quotes = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(quote) => quotes.push(quote),
            None if line.contains(SEPARATOR) => {
                warn!(
                    "Skipped malformed line in {} (body or author missing): '{}'",
                    source.display(),
                    line
                );
            }
            None => {
                warn!(
                    "Skipped line in {} due to missing '{}' separator: '{}'",
                    source.display(),
                    SEPARATOR,
                    line
                );
            }
        }
    }

    quotes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_body() {
        let quote = parse_line("\"Stay loyal\" - Xander").unwrap();
        assert_eq!(quote.body(), "Stay loyal");
        assert_eq!(quote.author(), "Xander");
    }

    #[test]
    fn test_parse_unquoted_body() {
        let quote = parse_line("Life is better with a dog - Anonymous").unwrap();
        assert_eq!(quote.body(), "Life is better with a dog");
        assert_eq!(quote.author(), "Anonymous");
    }

    #[test]
    fn test_parse_empty_author() {
        assert!(parse_line("Fetch the ball -  ").is_none());
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_line("\"\" - Rex").is_none());
        assert!(parse_line(" - Rex").is_none());
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        let quote = parse_line("A - B - C").unwrap();
        assert_eq!(quote.body(), "A");
        assert_eq!(quote.author(), "B - C");
    }

    #[test]
    fn test_parse_without_separator() {
        assert!(parse_line("Just a sentence").is_none());
        assert!(parse_line("Hyphenated-word-only").is_none());
        assert!(parse_line("Tight -spacing").is_none());
    }

    #[test]
    fn test_parse_unbalanced_quote_kept() {
        let quote = parse_line("\"Sit, stay, nap - Bella").unwrap();
        assert_eq!(quote.body(), "Sit, stay, nap");

        let quote = parse_line("Roll 'over' \"now - Max").unwrap();
        assert_eq!(quote.body(), "Roll 'over' \"now");
    }

    #[test]
    fn test_parse_lines_skips_blank_and_malformed() {
        let text = "\"To bork or not to bork\" - Bork\n\n   \nNo separator here\nTreat first - \nChase the mailman - Skittle\n";
        let quotes = parse_lines(text.lines(), Path::new("quotes.txt"));

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].body(), "To bork or not to bork");
        assert_eq!(quotes[0].author(), "Bork");
        assert_eq!(quotes[1].author(), "Skittle");
    }

    #[test]
    fn test_parse_lines_trims_layout_padding() {
        let text = "        \"Bark like no one is listening\" - Rex      \n";
        let quotes = parse_lines(text.lines(), Path::new("quotes.pdf"));
        assert_eq!(quotes, vec![Quote::new("Bark like no one is listening", "Rex").unwrap()]);
    }
}
