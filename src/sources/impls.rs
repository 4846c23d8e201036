// Standard library
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

// Project imports
use crate::flags::{Families, IpVersion, Protocol, Protocols, SourceId};

// Current module imports
use super::constants::BUILTIN_SOURCES;
use super::errors::CatalogError;
use super::types::{Catalog, SourceDescriptor, SourceFilter, SourceSpec};

impl From<&SourceSpec> for SourceDescriptor {
    fn from(spec: &SourceSpec) -> Self {
        Self {
            id: spec.id,
            address: spec.address.to_string(),
            address_v4: spec.address_v4.map(str::to_string),
            address_v6: spec.address_v6.map(str::to_string),
            server: spec.server.map(str::to_string),
            protocols: spec.protocols.iter().copied().collect(),
            families: spec.families.iter().copied().collect(),
        }
    }
}

impl SourceDescriptor {
    pub fn new(
        id: SourceId,
        address: impl Into<String>,
        protocols: Protocols,
        families: Families,
    ) -> Self {
        Self {
            id,
            address: address.into(),
            address_v4: None,
            address_v6: None,
            server: None,
            protocols,
            families,
        }
    }

    pub fn with_ipv4_address(mut self, address: impl Into<String>) -> Self {
        self.address_v4 = Some(address.into());
        self
    }

    pub fn with_ipv6_address(mut self, address: impl Into<String>) -> Self {
        self.address_v6 = Some(address.into());
        self
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    /// Whether any DNS based protocol is advertised.
    pub fn uses_dns(&self) -> bool {
        self.protocols.intersects(Protocol::Dns | Protocol::DnsTxt)
    }

    /// Address to query when only `version` is wanted.
    pub fn address_for(&self, version: IpVersion) -> Option<&str> {
        match version {
            IpVersion::V4 => self.address_v4.as_deref(),
            IpVersion::V6 => self.address_v6.as_deref(),
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.address.trim().is_empty() {
            return Err(CatalogError::EmptyAddress(self.id));
        }

        if self.protocols.is_empty() {
            return Err(CatalogError::NoProtocols(self.id));
        }

        if self.families.is_empty() {
            return Err(CatalogError::NoFamilies(self.id));
        }

        let has_server = self
            .server
            .as_deref()
            .is_some_and(|server| !server.trim().is_empty());
        if self.uses_dns() && !has_server {
            return Err(CatalogError::MissingServer(self.id));
        }

        Ok(())
    }
}

impl Catalog {
    /// Builds a catalog from arbitrary descriptors, rejecting malformed entries.
    pub fn new(
        descriptors: impl IntoIterator<Item = SourceDescriptor>,
    ) -> Result<Self, CatalogError> {
        let mut sources = BTreeMap::new();
        for descriptor in descriptors {
            descriptor.validate()?;
            match sources.entry(descriptor.id) {
                Entry::Occupied(_) => return Err(CatalogError::Duplicate(descriptor.id)),
                Entry::Vacant(slot) => {
                    slot.insert(descriptor);
                }
            }
        }
        Ok(Self { sources })
    }

    /// The providers compiled into the binary.
    pub fn builtin() -> Self {
        let sources = BUILTIN_SOURCES
            .iter()
            .map(|spec| (spec.id, SourceDescriptor::from(spec)))
            .collect();
        Self { sources }
    }

    pub fn get(&self, id: SourceId) -> Option<&SourceDescriptor> {
        self.sources.get(&id)
    }

    pub fn contains(&self, id: SourceId) -> bool {
        self.sources.contains_key(&id)
    }

    /// Sources in try order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceDescriptor> {
        self.sources.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = SourceId> + '_ {
        self.sources.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl SourceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: SourceId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocols |= protocol;
        self
    }

    pub fn with_family(mut self, family: IpVersion) -> Self {
        self.families |= family;
        self
    }

    /// True when no axis is restricted.
    pub fn is_unconstrained(&self) -> bool {
        self.id.is_none() && self.protocols.is_empty() && self.families.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), BUILTIN_SOURCES.len());

        let rebuilt = Catalog::new(builtin.iter().cloned()).expect("builtin catalog is valid");
        assert_eq!(rebuilt, builtin);
    }

    #[test]
    fn test_builtin_catalog_order() {
        let ids: Vec<_> = Catalog::builtin().ids().collect();
        assert_eq!(
            ids,
            vec![
                SourceId::Icanhazip,
                SourceId::IfconfigMe,
                SourceId::Ipify,
                SourceId::OpenDns,
                SourceId::GoogleDnsTxt,
            ]
        );
    }

    #[test]
    fn test_builtin_dns_sources_have_servers() {
        let catalog = Catalog::builtin();
        let open_dns = catalog.get(SourceId::OpenDns).unwrap();
        assert_eq!(open_dns.server.as_deref(), Some("resolver1.opendns.com"));
        assert_eq!(open_dns.protocols, Protocols::only(Protocol::Dns));

        let google = catalog.get(SourceId::GoogleDnsTxt).unwrap();
        assert_eq!(google.server.as_deref(), Some("ns1.google.com"));
        assert_eq!(google.protocols, Protocols::only(Protocol::DnsTxt));
    }

    #[test]
    fn test_new_rejects_dns_source_without_server() {
        let descriptor = SourceDescriptor::new(
            SourceId::OpenDns,
            "myip.opendns.com",
            Protocol::Dns.into(),
            Families::all(),
        );
        assert_eq!(
            Catalog::new([descriptor]),
            Err(CatalogError::MissingServer(SourceId::OpenDns))
        );
    }

    #[test]
    fn test_new_rejects_empty_sets() {
        let no_protocols = SourceDescriptor::new(
            SourceId::Ipify,
            "api.ipify.org",
            Protocols::empty(),
            Families::all(),
        );
        assert_eq!(
            Catalog::new([no_protocols]),
            Err(CatalogError::NoProtocols(SourceId::Ipify))
        );

        let no_families = SourceDescriptor::new(
            SourceId::Ipify,
            "api.ipify.org",
            Protocols::all(),
            Families::empty(),
        )
        .with_server("ns.example.net");
        assert_eq!(
            Catalog::new([no_families]),
            Err(CatalogError::NoFamilies(SourceId::Ipify))
        );
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let source = SourceDescriptor::new(
            SourceId::Icanhazip,
            "icanhazip.com",
            Protocol::Https.into(),
            IpVersion::V4.into(),
        );
        assert_eq!(
            Catalog::new([source.clone(), source]),
            Err(CatalogError::Duplicate(SourceId::Icanhazip))
        );
    }

    #[test]
    fn test_filter_builder() {
        let filter = SourceFilter::new();
        assert!(filter.is_unconstrained());

        let filter = filter
            .with_family(IpVersion::V6)
            .with_protocol(Protocol::Https)
            .with_protocol(Protocol::DnsTxt)
            .with_id(SourceId::Ipify);
        assert!(!filter.is_unconstrained());
        assert_eq!(filter.id, Some(SourceId::Ipify));
        assert_eq!(filter.protocols, Protocol::Https | Protocol::DnsTxt);
        assert_eq!(filter.families.single(), Some(IpVersion::V6));
    }
}
