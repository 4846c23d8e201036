// 3rd party crates
use tracing::{debug, trace};

// Current module imports
use super::types::{Catalog, SourceDescriptor, SourceFilter};

/// Reduces `catalog` to the sources allowed by `filter`.
///
/// Each surviving source only keeps the protocols and address families the
/// filter permits. When exactly one family survives and the source has an
/// address dedicated to it, that address replaces the default one.
///
/// Without a filter the catalog is returned as-is. An empty result is valid
/// and simply leaves nothing to try.
pub fn narrow(catalog: &Catalog, filter: Option<&SourceFilter>) -> Catalog {
    let Some(filter) = filter else {
        return catalog.clone();
    };

    let sources = catalog
        .sources
        .iter()
        .filter_map(|(id, source)| narrow_source(source, filter).map(|narrowed| (*id, narrowed)))
        .collect();

    Catalog { sources }
}

fn narrow_source(source: &SourceDescriptor, filter: &SourceFilter) -> Option<SourceDescriptor> {
    if !filter.protocols.is_empty() && !source.protocols.intersects(filter.protocols) {
        trace!(source = ?source.id, "Skipping source: no matching protocol");
        return None;
    }
    if !filter.families.is_empty() && !source.families.intersects(filter.families) {
        trace!(source = ?source.id, "Skipping source: no matching address family");
        return None;
    }
    if filter.id.is_some_and(|id| id != source.id) {
        trace!(source = ?source.id, "Skipping source: not the requested provider");
        return None;
    }

    let mut narrowed = source.clone();

    if !filter.protocols.is_empty() {
        narrowed.protocols = source.protocols & filter.protocols;
    }

    if !filter.families.is_empty() {
        narrowed.families = source.families & filter.families;

        if let Some(address) = narrowed
            .families
            .single()
            .and_then(|version| source.address_for(version))
        {
            narrowed.address = address.to_string();
        }
    }

    debug!(
        source = ?narrowed.id,
        address = %narrowed.address,
        protocols = ?narrowed.protocols,
        families = ?narrowed.families,
        "Adding valid source"
    );

    Some(narrowed)
}
