pub mod omdb;
pub mod provider;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("provider error: {0}")]
    Provider(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Canonical title and year as reported by a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieMetadata {
    pub title: String,
    pub year: String, // may be a range such as "1999–2003" for series
}
