//! Watcher Client Library
//!
//! Async client for the search-engine watcher REST API. Every call maps to
//! exactly one HTTP request issued through a pluggable [`Transport`].

mod client;
mod http;
mod transport;

pub use client::WatcherClient;
pub use http::HttpTransport;
pub use transport::{Request, Transport};
pub use watcher_core::{ArgumentError, Config, Method, Operation, Params};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Failed to read CA certificate {path}: {source}")]
    Certificate {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
