/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Errors produced by the Stream API client
#[derive(Debug)]
pub enum AppError {
    /// Transport failure: connection, DNS, TLS or timeout
    Network(reqwest::Error),
    /// The server answered with a status outside the 2xx/3xx range
    Unexpected {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Raw response body, kept for diagnostics
        body: String,
    },
    /// A success response whose body is not valid JSON
    Json(serde_json::Error),
    /// A success response whose JSON body has no `data` field
    MissingData,
    /// The `data` payload does not have the shape the caller asked for
    Deserialization(String),
    /// Invalid input supplied by the caller
    InvalidInput(String),
}

impl AppError {
    /// HTTP status carried by the error, if it came from a server response
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unexpected { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Raw response body carried by the error, if any
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            AppError::Unexpected { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unexpected { status, body } => {
                write!(f, "unexpected status {status}: {body}")
            }
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::MissingData => write!(f, "response has no data field"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
