// Standard library
use std::net::IpAddr;
use std::time::Duration;

// Current module imports
use super::traits::Transport;

/// The parts of a DNS answer record the fetcher cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsAnswer {
    /// A or AAAA record.
    Address(IpAddr),
    /// TXT record, one entry per character-string.
    Text(Vec<String>),
    /// Any other record type, by name.
    Other(String),
}

/// Walks candidate sources until one reports a public address.
pub struct Fetcher<T: Transport = NetTransport> {
    pub(super) transport: T,
}

/// Network-backed [`Transport`]: reqwest for HTTP(S), UDP for DNS.
#[derive(Debug, Clone)]
pub struct NetTransport {
    pub client: reqwest::Client,
    pub dns_timeout: Duration,
}
