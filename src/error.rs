//! Error types for the steamshelf crate

/// Result type alias for steamshelf operations
pub type Result<T> = std::result::Result<T, SteamError>;

/// Errors that can occur when building or configuring the client
///
/// Note that `fetch_library` and the renderer never return these: any
/// runtime failure on the fetch path degrades to an empty library so the
/// widget always renders.
#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Unrecognized CDN or storefront provider name
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}
