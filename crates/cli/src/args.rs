use std::ffi::OsString;

use clap::{CommandFactory, Parser};
use discslug_core::{ImdbId, LookupRequest, UsageError};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "discslug")]
#[command(version, about = "Print a filename-safe slug for a movie title or IMDb ID")]
#[command(override_usage = "discslug \"Movie Title\" [year]\n       \
                            discslug tt1234567\n       \
                            discslug --imdb tt1234567")]
pub struct Cli {
    /// Look up by IMDb ID (tt followed by digits)
    #[arg(long, value_name = "ID")]
    pub imdb: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Movie title, or a bare IMDb ID
    #[arg(allow_hyphen_values = true)]
    pub title: Option<String>,

    /// Release year
    #[arg(allow_hyphen_values = true)]
    pub year: Option<String>,

    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Classify the parsed arguments into a lookup request.
    pub fn into_request(self) -> Result<LookupRequest, UsageError> {
        if let Some(id) = self.imdb {
            if self.title.is_some() || self.year.is_some() || !self.rest.is_empty() {
                return Err(UsageError::Malformed(
                    "--imdb takes exactly one argument".into(),
                ));
            }
            return id.parse::<ImdbId>().map(LookupRequest::Imdb);
        }

        let Some(title) = self.title else {
            return Err(UsageError::MissingArguments);
        };

        if let Ok(id) = title.parse::<ImdbId>() {
            if let Some(year) = &self.year {
                debug!(%id, year = %year, "ignoring year for IMDb ID lookup");
            }
            return Ok(LookupRequest::Imdb(id));
        }

        if !self.rest.is_empty() {
            debug!(extra = ?self.rest, "ignoring extra arguments");
        }

        Ok(LookupRequest::title(title, self.year))
    }
}

/// Parse a full argument vector (program name first) into a request.
pub fn parse_args<I, T>(args: I) -> Result<LookupRequest, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
        .map_err(|e| usage_error(&e))?
        .into_request()
}

/// Map a clap failure onto our usage error, keeping only its headline.
pub fn usage_error(err: &clap::Error) -> UsageError {
    let rendered = err.to_string();
    let headline = rendered.lines().next().unwrap_or_default();
    UsageError::Malformed(headline.trim_start_matches("error: ").trim().to_string())
}

/// Usage text printed to stderr on a usage error.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
