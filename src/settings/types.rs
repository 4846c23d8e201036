// 3rd party crates
use serde::Deserialize;

// Current module imports
use super::constants::{default_dns_timeout, default_http_timeout, default_log_level};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Http {
    /// Whole-request timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Dns {
    /// Time to wait for a DNS reply in seconds
    #[serde(default = "default_dns_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub http: Http,
    #[serde(default)]
    pub dns: Dns,
}
