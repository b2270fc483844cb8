pub mod config;
pub mod error;
pub mod ingest;
pub mod input;
pub mod logging;
pub mod meme;
pub mod quote;
pub mod sources;
pub mod utils;

pub use error::{MemeError, Result};
pub use ingest::{Extractor, Ingestor};
pub use meme::MemeEngine;
pub use quote::Quote;
