use discslug_metadata::omdb::DEFAULT_BASE_URL;

/// Environment variable holding the OMDb API key.
pub const API_KEY_VAR: &str = "OMDB_API_KEY";
/// Environment variable overriding the OMDb endpoint.
pub const API_URL_VAR: &str = "OMDB_API_URL";

/// Runtime configuration, read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` disables provider lookups entirely.
    pub api_key: Option<String>,
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset;
    /// anything else is used verbatim.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_blank(API_KEY_VAR),
            api_url: non_blank(API_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}
