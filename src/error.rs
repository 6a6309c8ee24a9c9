use std::result::Result as StdResult;
use thiserror::Error;
use reqwest;
use serde_json;
use prometheus;
use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("API invalid format: {0}")]
    ApiInvalidFormat(String),
    #[error("Upstream returned status {status} for {url}")]
    HttpStatus { status: u16, url: String },
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Clearance error: {0}")]
    ClearanceError(String),
    #[error("Request failed without proxy (last status: {})", display_status(.status))]
    DirectRequestFailed { status: Option<u16> },
    #[error(
        "Request failed with status code: {} (direct status: {}): {}",
        display_status(.status),
        display_status(.direct_status),
        .reason
    )]
    RequestFailed {
        status: Option<u16>,
        direct_status: Option<u16>,
        reason: String,
    },
    #[error("Error retrieving data from DexScreener API: {0}")]
    DexScreenerError(#[source] Box<Error>),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

fn display_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

impl Error {
    /// Status code of the last upstream response, if the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::DirectRequestFailed { status } => *status,
            Error::RequestFailed { status, direct_status, .. } => status.or(*direct_status),
            Error::HttpError(err) => err.status().map(|s| s.as_u16()),
            Error::DexScreenerError(inner) => inner.status(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ApiInvalidFormat(err.to_string())
    }
}

impl From<prometheus::Error> for Error {
    fn from(err: prometheus::Error) -> Self {
        Error::InternalError(err.to_string())
    }
}

pub type Result<T> = StdResult<T, Error>;
