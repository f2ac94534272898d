use discslug_core::LookupRequest;

use crate::{MetadataError, MovieMetadata};

/// A metadata provider that resolves a request into a canonical title/year.
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Look up a movie by IMDb ID, or by title and optional year.
    async fn lookup(&self, request: &LookupRequest) -> Result<MovieMetadata, MetadataError>;
}
