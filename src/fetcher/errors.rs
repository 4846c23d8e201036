// 3rd party crates
use thiserror::Error;

// Project imports
use crate::flags::SourceId;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to resolve DNS server '{host}': {error}")]
    HostLookup {
        host: String,
        error: std::io::Error,
    },

    #[error("DNS server '{0}' resolved to no addresses")]
    NoAddress(String),

    #[error("Source {0:?} has no DNS server configured")]
    MissingServer(SourceId),

    #[error("Invalid DNS name '{name}': {message}")]
    InvalidName { name: String, message: String },

    #[error("DNS protocol error: {0}")]
    Proto(#[from] hickory_proto::ProtoError),

    #[error("Socket error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DNS query to {0} timed out")]
    Timeout(String),

    #[error("Empty answer for {0}")]
    EmptyAnswer(String),

    #[error("Unexpected {kind} record for {target}")]
    UnexpectedRecord { target: String, kind: String },

    #[error("Invalid response from {id:?}: {response}")]
    InvalidResponse { id: SourceId, response: String },
}
