// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Api(ApiError),
    Config(String),
    Io(String),
}

/// Specific error types for the remote cat image fetch.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the service (DNS, connect, timeout).
    Network(String),

    /// The service answered with a non-success HTTP status.
    HttpStatus(u16),

    /// The service answered with an empty image list.
    EmptyResponse,

    /// The response body could not be parsed as the expected JSON shape.
    MalformedPayload(String),

    /// The fetched bytes are not a decodable image format.
    NotAnImage(String),

    /// The image payload exceeds the size cap.
    PayloadTooLarge(u64),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "error-fetch-network",
            ApiError::HttpStatus(_) => "error-fetch-status",
            ApiError::EmptyResponse => "error-fetch-empty",
            ApiError::MalformedPayload(_) => "error-fetch-malformed",
            ApiError::NotAnImage(_) => "error-fetch-not-image",
            ApiError::PayloadTooLarge(_) => "error-fetch-too-large",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::HttpStatus(code) => write!(f, "HTTP status: {}", code),
            ApiError::EmptyResponse => write!(f, "Empty response from image service"),
            ApiError::MalformedPayload(msg) => write!(f, "Malformed payload: {}", msg),
            ApiError::NotAnImage(url) => write!(f, "Not a displayable image: {}", url),
            ApiError::PayloadTooLarge(bytes) => {
                write!(f, "Image payload too large: {} bytes", bytes)
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return ApiError::HttpStatus(status.as_u16());
        }
        if err.is_decode() {
            return ApiError::MalformedPayload(err.to_string());
        }
        ApiError::Network(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api(e) => write!(f, "Fetch Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
