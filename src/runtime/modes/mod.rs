//! Mode routing
//!
//! `serve` (or no subcommand) starts the HTTP server; every other subcommand
//! is a one-shot CLI action.

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "server")]
pub use server::run_server;

#[cfg(feature = "cli")]
pub use cli::run_cli;
