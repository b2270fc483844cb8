pub mod dispatcher;
pub mod extractor;
pub mod grammar;
pub mod types;

pub use dispatcher::Ingestor;
pub use extractor::Extractor;
pub use grammar::{parse_line, parse_lines};
