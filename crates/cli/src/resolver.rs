//! Title resolution: request in, slug out.
//!
//! Lookups never fail the run. Without a provider, or when the provider
//! errors, the slug is derived from the original input.

use discslug_core::{LookupRequest, Slug};
use discslug_metadata::omdb::OmdbClient;
use discslug_metadata::provider::MetadataProvider;
use discslug_metadata::MetadataError;
use tracing::{debug, info, warn};

use crate::config::{Config, API_KEY_VAR};

pub struct Resolver {
    provider: Option<Box<dyn MetadataProvider>>,
}

impl Resolver {
    pub fn new(provider: Option<Box<dyn MetadataProvider>>) -> Self {
        Self { provider }
    }

    /// Resolver backed by OMDb when an API key is configured.
    pub fn from_config(config: &Config) -> Result<Self, MetadataError> {
        let provider = match &config.api_key {
            Some(key) => {
                let client = OmdbClient::with_base_url(key.clone(), config.api_url.clone())?;
                Some(Box::new(client) as Box<dyn MetadataProvider>)
            }
            None => None,
        };
        Ok(Self::new(provider))
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn resolve(&self, request: &LookupRequest) -> Slug {
        let Some(provider) = &self.provider else {
            info!("{API_KEY_VAR} not set; returning basic slug only");
            return request.fallback_slug();
        };

        match provider.lookup(request).await {
            Ok(meta) => {
                debug!(
                    provider = provider.name(),
                    title = %meta.title,
                    year = %meta.year,
                    "resolved metadata"
                );
                Slug::new(&meta.title, Some(meta.year.as_str()))
            }
            Err(MetadataError::Network(e)) => {
                warn!(provider = provider.name(), error = %e, "error querying provider, using input slug");
                request.fallback_slug()
            }
            Err(MetadataError::Provider(e)) => {
                warn!(provider = provider.name(), error = %e, "lookup failed, using input slug");
                request.fallback_slug()
            }
        }
    }
}
