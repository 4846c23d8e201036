// Standard library
use std::net::{IpAddr, SocketAddr};

// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::FetchError;
use super::types::DnsAnswer;

/// Network primitives the fetcher is built on.
///
/// Each call is a single independent exchange: no retries, no caching and no
/// state shared between calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET request and returns the response body.
    async fn http_get(&self, url: &str) -> Result<String, FetchError>;

    /// Resolves a host name with the system resolver.
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, FetchError>;

    /// Sends an ANY query for `target` to `server` and returns the answer
    /// section in order.
    async fn dns_query(&self, target: &str, server: SocketAddr)
        -> Result<Vec<DnsAnswer>, FetchError>;
}
