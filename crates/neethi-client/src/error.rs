//! Request failure taxonomy

use thiserror::Error;

/// Why a backend call did not produce a payload
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got a response
    #[error("network error: {message}")]
    Network { message: String },

    /// The backend answered with a non-2xx status
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the JSON shape expected for the endpoint
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ClientError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Transport failures and error statuses are both network errors to
    /// the user.
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network { .. } | ClientError::Status { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::network(err.to_string())
    }
}
