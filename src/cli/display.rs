// Standard library
use std::fmt::{self, Write};

// Project imports
use crate::flags::{Flag, FlagSet, IpVersion, Protocol, SourceId};
use crate::sources::Catalog;

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Members joined with `|`, e.g. `IPv4|IPv6`.
impl<T: Flag> fmt::Display for FlagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, flag) in self.iter().enumerate() {
            if i > 0 {
                f.write_char('|')?;
            }
            f.write_str(flag.name())?;
        }
        Ok(())
    }
}

/// One line per source: id, address, protocols, families.
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for source in catalog.iter() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{:<14} {:<26} {:<12} {}",
            source.id.to_string(),
            source.address,
            source.protocols.to_string(),
            source.families
        );
    }
    out
}
