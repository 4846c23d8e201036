// Project imports
use crate::flags::Protocol;

pub const DNS_PORT: u16 = 53;

/// Largest DNS message accepted over UDP (EDNS0 common ceiling).
pub const MAX_UDP_PAYLOAD: usize = 4096;

/// Web protocols in the order they are attempted. DNS always comes last.
pub const WEB_PROTOCOLS: [(Protocol, &str); 2] =
    [(Protocol::Https, "https"), (Protocol::Http, "http")];
