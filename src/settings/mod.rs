//! Runtime settings.
//!
//! There is no settings file: everything comes from `PUBIP__*` environment
//! variables (a `.env` file is honoured by the binary), falling back to
//! defaults.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PUBIP__LOG__LEVEL` | `warn` |
//! | `PUBIP__HTTP__TIMEOUT` | `5` |
//! | `PUBIP__DNS__TIMEOUT` | `5` |

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;

pub use errors::SettingsError;
pub use types::Settings;
