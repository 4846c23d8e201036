// 3rd party crates
use clap::Parser;

// Project imports
use crate::flags::{IpVersion, Protocol, SourceId};
use crate::sources::SourceFilter;

/// Print the public IP address of this host.
#[derive(Debug, Parser)]
#[command(name = "pubip", version)]
pub struct Args {
    /// Only use sources that answer with IPv4
    #[arg(short = '4')]
    pub ipv4: bool,

    /// Only use sources that answer with IPv6
    #[arg(short = '6')]
    pub ipv6: bool,

    /// Only use the named provider (e.g. ipify, opendns). Unknown names are
    /// rejected instead of falling back to every provider.
    #[arg(short = 'i', long = "id", value_name = "ID")]
    pub id: Option<SourceId>,

    /// Only use the given protocol; may be repeated (http, https, dns, dns-txt)
    #[arg(short = 'p', long = "protocol", value_name = "PROTOCOL")]
    pub protocols: Vec<Protocol>,

    /// List the known providers and exit
    #[arg(long)]
    pub list: bool,
}

impl Args {
    /// The filter described by the flags, or `None` when no flag restricts anything.
    pub fn filter(&self) -> Option<SourceFilter> {
        let mut filter = SourceFilter::new();

        if self.ipv4 {
            filter = filter.with_family(IpVersion::V4);
        }
        if self.ipv6 {
            filter = filter.with_family(IpVersion::V6);
        }
        if let Some(id) = self.id {
            filter = filter.with_id(id);
        }
        for protocol in &self.protocols {
            filter = filter.with_protocol(*protocol);
        }

        (!filter.is_unconstrained()).then_some(filter)
    }
}
