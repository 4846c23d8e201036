//! Command line surface: flag parsing and human readable output.

pub mod args;
pub mod display;

pub use args::Args;
pub use display::render_catalog;
