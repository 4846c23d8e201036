//! Source catalog and filter engine.
//!
//! The catalog is a fixed table of public IP lookup providers, each described
//! by the protocols it speaks and the address families it can answer with.
//! [`narrow`] reduces the catalog to what a [`SourceFilter`] allows.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;

pub use errors::CatalogError;
pub use functions::narrow;
pub use types::{Catalog, SourceDescriptor, SourceFilter};
