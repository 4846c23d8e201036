//! Closed capability enums and the typed set used to combine them.

pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;

pub use errors::ParseFlagError;
pub use traits::Flag;
pub use types::{Families, FlagSet, IpVersion, Protocol, Protocols, SourceId};
