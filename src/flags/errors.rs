// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseFlagError {
    #[error("Unknown {kind} '{value}'")]
    Unknown { kind: &'static str, value: String },
}
