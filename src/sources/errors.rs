// 3rd party crates
use thiserror::Error;

// Project imports
use crate::flags::SourceId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Source {0:?} is listed more than once")]
    Duplicate(SourceId),

    #[error("Source {0:?} has no protocols")]
    NoProtocols(SourceId),

    #[error("Source {0:?} has no address families")]
    NoFamilies(SourceId),

    #[error("Source {0:?} has an empty address")]
    EmptyAddress(SourceId),

    #[error("Source {0:?} speaks DNS but has no server")]
    MissingServer(SourceId),
}
