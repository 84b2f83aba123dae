//! Client Error Translation
//!
//! Whatever goes wrong below this layer (socket errors, error replies,
//! exhausted cluster redirections, replies that fail conversion) is folded
//! into one store-agnostic [`DataAccessError`] before it reaches application
//! code.
//!
//! ```text
//! ClientError                     DataAccessError
//! ─────────────────────────────   ───────────────────────────
//! Io, Connection              ──> ConnectionFailure
//! Server, Protocol            ──> InvalidApiUsage
//! MaxRedirections             ──> TooManyClusterRedirections
//! Convert, Other              ──> System
//! ```
//!
//! Translation is total: every [`ClientError`] maps to exactly one
//! [`DataAccessError`], and the translation itself cannot fail.

use crate::error::ConvertError;
use crate::protocol::RespValue;
use thiserror::Error;
use tracing::debug;

/// Failures raised by the client and transport layers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Socket-level failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection could not be established or was lost
    #[error("connection error: {0}")]
    Connection(String),

    /// The server answered with an error reply
    #[error("server error: {0}")]
    Server(String),

    /// A cluster request kept being redirected
    #[error("too many cluster redirections: {0}")]
    MaxRedirections(String),

    /// The client misused the protocol
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A reply could not be converted
    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClientError {
    /// Lifts an error reply into [`ClientError::Server`].
    pub fn from_reply(reply: &RespValue) -> Option<Self> {
        match reply {
            RespValue::Error(message) => Some(ClientError::Server(message.clone())),
            _ => None,
        }
    }
}

/// Store-agnostic data access failures.
#[derive(Debug, Error)]
pub enum DataAccessError {
    #[error("could not connect to the store: {message}")]
    ConnectionFailure {
        message: String,
        #[source]
        source: ClientError,
    },

    #[error("invalid data access API usage: {message}")]
    InvalidApiUsage {
        message: String,
        #[source]
        source: ClientError,
    },

    #[error("too many cluster redirections: {message}")]
    TooManyClusterRedirections {
        message: String,
        #[source]
        source: ClientError,
    },

    #[error("unexpected store error: {message}")]
    System {
        message: String,
        #[source]
        source: ClientError,
    },
}

impl DataAccessError {
    /// The underlying client error.
    pub fn client_error(&self) -> &ClientError {
        match self {
            DataAccessError::ConnectionFailure { source, .. }
            | DataAccessError::InvalidApiUsage { source, .. }
            | DataAccessError::TooManyClusterRedirections { source, .. }
            | DataAccessError::System { source, .. } => source,
        }
    }
}

/// Translates a client error into the data access taxonomy.
pub fn to_data_access_error(err: ClientError) -> DataAccessError {
    let message = err.to_string();

    let translated = match err {
        ClientError::Io(_) | ClientError::Connection(_) => DataAccessError::ConnectionFailure {
            message,
            source: err,
        },
        ClientError::Server(_) | ClientError::Protocol(_) => DataAccessError::InvalidApiUsage {
            message,
            source: err,
        },
        ClientError::MaxRedirections(_) => DataAccessError::TooManyClusterRedirections {
            message,
            source: err,
        },
        ClientError::Convert(_) | ClientError::Other(_) => DataAccessError::System {
            message,
            source: err,
        },
    };

    debug!(error = %translated, "Translated client error");
    translated
}

impl From<ClientError> for DataAccessError {
    fn from(err: ClientError) -> Self {
        to_data_access_error(err)
    }
}
