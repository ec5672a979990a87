/*!
 * Error types for the subfluent library.
 *
 * This module contains custom error types for the subtitle and translation
 * paths, using the thiserror crate for ergonomic error definitions. The
 * `status_code` helpers expose the mapping the fronting HTTP layer needs
 * without pulling that layer into this crate.
 */

use thiserror::Error;

/// Errors that can occur on the subtitle read paths
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// A required request parameter was absent or blank
    #[error("{0} is required")]
    InvalidRequest(String),

    /// Transport-level failure reaching the timed-text endpoint
    #[error("Timed-text endpoint unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream was reachable but returned no usable cues
    #[error("{0}")]
    NoCaptionsFound(String),

    /// Upstream returned a payload the parser could not decode
    #[error("Failed to parse timed-text payload: {0}")]
    ParseError(String),
}

impl SubtitleError {
    /// HTTP status the fronting layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::NoCaptionsFound(_) => 404,
            Self::UpstreamUnavailable(_) | Self::ParseError(_) => 500,
        }
    }
}

/// Errors that can occur when working with completion provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur during vocabulary translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// A required request parameter was absent or blank
    #[error("{0} is required")]
    InvalidRequest(String),

    /// Transport-level failure reaching the completion service
    #[error("Translation service unavailable: {0}")]
    Unavailable(#[from] ProviderError),
}

impl TranslationError {
    /// HTTP status the fronting layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::Unavailable(_) => 500,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a subtitle read path
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from vocabulary translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from configuration loading or validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    /// HTTP status the fronting layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Subtitle(e) => e.status_code(),
            Self::Translation(e) => e.status_code(),
            Self::Config(_) | Self::Unknown(_) => 500,
        }
    }
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
