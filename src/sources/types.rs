// Standard library
use std::collections::BTreeMap;

// Project imports
use crate::flags::{Families, IpVersion, Protocol, Protocols, SourceId};

/// Catalog entry for one lookup provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub id: SourceId,
    /// Host, or host and path, queried when no family-specific address applies.
    pub address: String,
    /// Host answering with IPv4 only.
    pub address_v4: Option<String>,
    /// Host answering with IPv6 only.
    pub address_v6: Option<String>,
    /// DNS server to ask. Required for [`Protocol::Dns`] and [`Protocol::DnsTxt`].
    pub server: Option<String>,
    pub protocols: Protocols,
    pub families: Families,
}

/// Static description of a builtin source.
pub struct SourceSpec {
    pub id: SourceId,
    pub address: &'static str,
    pub address_v4: Option<&'static str>,
    pub address_v6: Option<&'static str>,
    pub server: Option<&'static str>,
    pub protocols: &'static [Protocol],
    pub families: &'static [IpVersion],
}

/// Caller restrictions on which sources may be used.
///
/// An empty set or `None` leaves that axis unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceFilter {
    pub id: Option<SourceId>,
    pub protocols: Protocols,
    pub families: Families,
}

/// Immutable set of sources keyed by id, iterated in [`SourceId`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) sources: BTreeMap<SourceId, SourceDescriptor>,
}
