//! Fetch orchestration
//!
//! Walks the narrowed source catalog one source at a time. Each source is
//! asked over the protocols it still advertises, in a fixed order:
//!
//! 1. HTTPS
//! 2. HTTP
//! 3. DNS or DNS-TXT (a single query either way)
//!
//! The first answer that parses as an IP address wins. Failures of any kind
//! are logged and the next protocol or source is tried; only exhaustion is
//! reported to the caller.
//!
//! Network access goes through the [`Transport`] trait so the orchestration
//! can be exercised without a network. [`NetTransport`] is the real one.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod traits;
pub mod transport;
pub mod types;

pub use errors::FetchError;
pub use traits::Transport;
pub use types::{DnsAnswer, Fetcher, NetTransport};
