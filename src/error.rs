use thiserror::Error;

/// Errors that abort a playlist run.
///
/// A song that cannot be found on Spotify is not an error: the resolver
/// reports it as `None` and the flow carries on. Likewise, an empty chart
/// or an empty resolution ends the run normally without creating anything.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure or a non-success HTTP status.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The fetched page does not have the expected table layout, or a cell
    /// holds something other than a number.
    #[error("{0}")]
    Parse(String),

    /// The artist search returned no results.
    #[error("Artist '{0}' not found on Spotify")]
    ArtistNotFound(String),

    /// A required environment variable is missing or unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable token, or the OAuth exchange failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Res<T> = std::result::Result<T, Error>;
