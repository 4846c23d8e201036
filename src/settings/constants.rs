/// Prefix of the environment variables read into [`Settings`](super::types::Settings),
/// e.g. `PUBIP__LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "PUBIP";
pub const ENV_SEPARATOR: &str = "__";

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Default settings
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_DNS_TIMEOUT_SECS: u64 = 5;

pub fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

pub fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

pub fn default_dns_timeout() -> u64 {
    DEFAULT_DNS_TIMEOUT_SECS
}
