//! OMDb (Open Movie Database) provider client.
//!
//! Uses the OMDb query API: https://www.omdbapi.com/
//!
//! The response field names (`Response`, `Title`, `Year`, `Error`) are part of
//! the provider contract and are matched case-sensitively.

use discslug_core::LookupRequest;
use serde::Deserialize;
use tracing::debug;

use crate::provider::MetadataProvider;
use crate::{MetadataError, MovieMetadata};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OmdbClient {
    /// Client for `base_url`, normally [`DEFAULT_BASE_URL`].
    pub fn with_base_url(
        api_key: String,
        base_url: impl Into<String>,
    ) -> Result<Self, MetadataError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("discslug/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        Ok(Self {
            api_key,
            base_url: base_url.into(),
            client,
        })
    }

    async fn get_json(&self, params: &[(&str, &str)]) -> Result<OmdbResponse, MetadataError> {
        let mut all_params = vec![("apikey", self.api_key.as_str())];
        all_params.extend_from_slice(params);

        // Never log the api key.
        debug!(url = %self.base_url, ?params, "OMDb request");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&all_params)
            .send()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        if !status.is_success() {
            // OMDb still sends `{"Response":"False","Error":..}` for 401s.
            let detail = serde_json::from_str::<OmdbResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or_else(|| format!("OMDb returned {status}"));
            return Err(MetadataError::Provider(detail));
        }

        serde_json::from_str(&body).map_err(|e| MetadataError::Network(format!("parse JSON: {e}")))
    }
}

#[async_trait::async_trait]
impl MetadataProvider for OmdbClient {
    fn name(&self) -> &str {
        "omdb"
    }

    async fn lookup(&self, request: &LookupRequest) -> Result<MovieMetadata, MetadataError> {
        let params = query_params(request);
        let data = self.get_json(&params).await?;
        parse_lookup_response(data, request)
    }
}

/// Query parameters for a request, preferring the IMDb ID when present.
fn query_params(request: &LookupRequest) -> Vec<(&'static str, &str)> {
    match request {
        LookupRequest::Imdb(id) => vec![("i", id.as_str())],
        LookupRequest::Title { title, year } => {
            let mut params = vec![("t", title.as_str())];
            if let Some(y) = year {
                params.push(("y", y.as_str()));
            }
            params
        }
    }
}

fn parse_lookup_response(
    data: OmdbResponse,
    request: &LookupRequest,
) -> Result<MovieMetadata, MetadataError> {
    if data.response.as_deref() != Some("True") {
        return Err(MetadataError::Provider(
            data.error.unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }

    Ok(MovieMetadata {
        title: data
            .title
            .unwrap_or_else(|| request.display_title().to_string()),
        year: data
            .year
            .or_else(|| request.year().map(|y| y.to_string()))
            .unwrap_or_default(),
    })
}
