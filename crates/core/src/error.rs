use thiserror::Error;

/// Invalid or missing command-line arguments.
///
/// These are the only fatal errors; every lookup failure degrades to a
/// fallback slug instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("missing arguments")]
    MissingArguments,

    #[error("malformed arguments: {0}")]
    Malformed(String),

    #[error("Invalid IMDb ID: {0}")]
    InvalidImdbId(String),
}

impl UsageError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_message_names_the_id() {
        let err = UsageError::InvalidImdbId("xx123".into());
        assert_eq!(err.to_string(), "Invalid IMDb ID: xx123");
    }

    #[test]
    fn every_usage_error_exits_with_one() {
        for err in [
            UsageError::MissingArguments,
            UsageError::Malformed("unexpected argument".into()),
            UsageError::InvalidImdbId("tt".into()),
        ] {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }
}
