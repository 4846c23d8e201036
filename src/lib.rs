//! Public IP address lookup.
//!
//! A fixed catalog of third-party services ([`sources::Catalog`]) is narrowed
//! by an optional [`sources::SourceFilter`] and then queried one source at a
//! time by a [`fetcher::Fetcher`] until one of them reports an address.
//!
//! ```no_run
//! use pubip::fetcher::Fetcher;
//! use pubip::flags::IpVersion;
//! use pubip::settings::Settings;
//! use pubip::sources::{Catalog, SourceFilter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = Fetcher::from_settings(&Settings::default())?;
//! let filter = SourceFilter::new().with_family(IpVersion::V6);
//!
//! match fetcher.lookup(&Catalog::builtin(), Some(&filter)).await {
//!     Some(ip) => println!("{}", ip),
//!     None => eprintln!("no source answered"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod fetcher;
pub mod flags;
pub mod settings;
pub mod sources;
