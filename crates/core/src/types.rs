use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::UsageError;
use crate::slug::slugify;

// tt followed by ASCII digits only
static RE_IMDB_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^tt[0-9]+$").unwrap());

/// A validated IMDb identifier such as `tt0133093`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImdbId(String);

impl ImdbId {
    /// Check whether `s` looks like an IMDb identifier.
    pub fn is_valid(s: &str) -> bool {
        RE_IMDB_ID.is_match(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ImdbId {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(UsageError::InvalidImdbId(s.to_string()))
        }
    }
}

impl std::fmt::Display for ImdbId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the user asked us to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    Imdb(ImdbId),
    Title { title: String, year: Option<String> },
}

impl LookupRequest {
    /// Build a title request; an empty or blank year counts as no year.
    pub fn title(title: impl Into<String>, year: Option<String>) -> Self {
        Self::Title {
            title: title.into(),
            year: year
                .map(|y| y.trim().to_string())
                .filter(|y| !y.is_empty()),
        }
    }

    pub fn year(&self) -> Option<&str> {
        match self {
            Self::Imdb(_) => None,
            Self::Title { year, .. } => year.as_deref(),
        }
    }

    /// The text a slug falls back to when nothing better is known.
    pub fn display_title(&self) -> &str {
        match self {
            Self::Imdb(id) => id.as_str(),
            Self::Title { title, .. } => title,
        }
    }

    /// Slug derived purely from the request, with no provider data.
    pub fn fallback_slug(&self) -> Slug {
        Slug::new(self.display_title(), self.year())
    }
}

/// Final output: a sanitized title stem plus an optional year.
///
/// Displays as `"<stem> (<year>)"`, or just `"<stem>"` when the year is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug {
    pub stem: String,
    pub year: Option<String>,
}

impl Slug {
    /// Sanitize `title` and attach `year` when it is non-empty.
    pub fn new(title: &str, year: Option<&str>) -> Self {
        Self {
            stem: slugify(title),
            year: year.filter(|y| !y.is_empty()).map(|y| y.to_string()),
        }
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.year {
            Some(year) => write!(f, "{} ({year})", self.stem),
            None => f.write_str(&self.stem),
        }
    }
}
