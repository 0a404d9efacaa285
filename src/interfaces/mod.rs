//! User-facing interfaces besides HTTP

#[cfg(feature = "cli")]
pub mod cli;
