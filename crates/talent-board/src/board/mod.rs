//! Board service: one entry point over a catalog source for both search engines.

mod service;
mod source;

pub use service::{BoardService, BoardServiceError};
pub use source::{CatalogSource, InMemoryCatalogSource, SourceError};
