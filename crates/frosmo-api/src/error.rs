use thiserror::Error;

/// Fallback message for non-2xx responses that carry no `message` field.
pub const UNKNOWN_ERROR_MESSAGE: &str = "The app encountered an unknown error.";

/// Top-level error type for the `frosmo-api` crate.
///
/// The first five variants are the typed Graniitti API failures that callers
/// present verbatim to the user. The rest are local failures (bad input,
/// undecodable payloads) that callers treat as generic errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Graniitti API ───────────────────────────────────────────────
    /// HTTP 401: the token is invalid or missing.
    #[error(
        "The Frosmo Graniitti API access token is invalid. Check that the token and region are valid for the specified site."
    )]
    TokenInvalid,

    /// HTTP 403: the token does not grant access to the requested site.
    #[error("The Frosmo Graniitti API access token is not valid for the specified site.")]
    TokenNotAuthorizedForSite,

    /// HTTP 404: the requested site does not exist.
    #[error("The site does not exist. Check that the site ID is correct.")]
    SiteNotFound,

    /// Any other non-2xx status. `message` is the server's `message` field
    /// when present, else [`UNKNOWN_ERROR_MESSAGE`].
    #[error("{message}")]
    UnknownApi { status: u16, message: String },

    /// The request never completed (DNS, refused connection, TLS, timeout).
    #[error("Connection to Frosmo failed: {0}")]
    ConnectionFailed(#[source] reqwest::Error),

    // ── Local ───────────────────────────────────────────────────────
    /// A 2xx body that does not match the expected shape.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// URL construction failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The token cannot be used as an HTTP header value.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    /// The HTTP client could not be built.
    #[error("HTTP transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Returns `true` for the typed Graniitti API failures whose message is
    /// meant for the user.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            Self::TokenInvalid
                | Self::TokenNotAuthorizedForSite
                | Self::SiteNotFound
                | Self::UnknownApi { .. }
                | Self::ConnectionFailed(_)
        )
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::TokenInvalid => Some(401),
            Self::TokenNotAuthorizedForSite => Some(403),
            Self::SiteNotFound => Some(404),
            Self::UnknownApi { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Map a non-2xx status and the server's optional message to a typed error.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => Self::TokenInvalid,
            403 => Self::TokenNotAuthorizedForSite,
            404 => Self::SiteNotFound,
            _ => Self::UnknownApi {
                status,
                message: message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.into()),
            },
        }
    }
}
