// Standard library
use std::net::IpAddr;

// Project imports
use crate::flags::SourceId;

// Current module imports
use super::errors::FetchError;

/// Longest response excerpt kept in an error.
const RESPONSE_EXCERPT_LEN: usize = 64;

/// Parses the text a source answered with as an IPv4 or IPv6 literal.
pub fn parse_ip(id: SourceId, text: &str) -> Result<IpAddr, FetchError> {
    text.parse::<IpAddr>()
        .map_err(|_| FetchError::InvalidResponse {
            id,
            response: text.chars().take(RESPONSE_EXCERPT_LEN).collect(),
        })
}
