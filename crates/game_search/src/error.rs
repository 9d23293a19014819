use std::path::PathBuf;

use thiserror::Error;

use crate::adapter::Score;

/// Usage errors reported by [`crate::SearchEngine`].
///
/// A well-behaved adapter cannot make the search itself fail, and
/// cancellation is reported through [`crate::SearchResult::cancelled`]
/// rather than here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("a search is already running on this engine")]
    SearchInProgress,
    #[error("invalid score bounds [{min}, {max}]: need min < max and min <= 0 <= max")]
    InvalidBounds { min: Score, max: Score },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Invalid(#[from] SearchError),
    #[error("unknown search strategy: {0}")]
    UnknownStrategy(String),
}
