// Standard library
use std::marker::PhantomData;

// Current module imports
use super::traits::Flag;

/// Transport used to ask a source for the public address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Protocol {
    Http,
    Https,
    /// Plain A/AAAA answer from a DNS server.
    Dns,
    /// Address carried in the text segments of a TXT answer.
    DnsTxt,
}

/// Address family a source can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

/// Known lookup providers. Declaration order is the order sources are tried in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceId {
    Icanhazip,
    IfconfigMe,
    Ipify,
    OpenDns,
    GoogleDnsTxt,
}

/// A typed set over a closed flag enum.
///
/// The empty set doubles as "unconstrained" in a
/// [`SourceFilter`](crate::sources::types::SourceFilter).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSet<T: Flag> {
    pub(super) bits: u8,
    pub(super) marker: PhantomData<T>,
}

pub type Protocols = FlagSet<Protocol>;
pub type Families = FlagSet<IpVersion>;
