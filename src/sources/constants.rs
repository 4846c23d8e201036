// Project imports
use crate::flags::{IpVersion, Protocol, SourceId};

// Current module imports
use super::types::SourceSpec;

const WEB: &[Protocol] = &[Protocol::Http, Protocol::Https];
const DUAL_STACK: &[IpVersion] = &[IpVersion::V4, IpVersion::V6];

/// Builtin lookup providers
pub const BUILTIN_SOURCES: [SourceSpec; 5] = [
    SourceSpec {
        id: SourceId::Icanhazip,
        address: "icanhazip.com",
        address_v4: Some("ipv4.icanhazip.com"),
        address_v6: Some("ipv6.icanhazip.com"),
        server: None,
        protocols: WEB,
        families: DUAL_STACK,
    },
    SourceSpec {
        id: SourceId::IfconfigMe,
        address: "ifconfig.me/ip",
        address_v4: None,
        address_v6: None,
        server: None,
        protocols: WEB,
        families: &[IpVersion::V4],
    },
    SourceSpec {
        id: SourceId::Ipify,
        address: "api.ipify.org",
        address_v4: Some("api.ipify.org"),
        address_v6: Some("api64.ipify.org"),
        server: None,
        protocols: WEB,
        families: DUAL_STACK,
    },
    SourceSpec {
        id: SourceId::OpenDns,
        address: "myip.opendns.com",
        address_v4: None,
        address_v6: None,
        server: Some("resolver1.opendns.com"),
        protocols: &[Protocol::Dns],
        families: DUAL_STACK,
    },
    SourceSpec {
        id: SourceId::GoogleDnsTxt,
        address: "o-o.myaddr.l.google.com",
        address_v4: None,
        address_v6: None,
        server: Some("ns1.google.com"),
        protocols: &[Protocol::DnsTxt],
        families: DUAL_STACK,
    },
];
