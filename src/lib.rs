//! EMAS Metal - corporate website for a precision CNC machining company
//!
//! Pages are rendered on the server in Turkish or English. Reference and
//! gallery listings come from an external content API with static fallback
//! data; the contact form is validated locally and relayed to the same API.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Command-line helpers (config generation, API check)
//!
//! # Architecture
//! - `api`: HTTP handlers and middleware
//! - `client`: Content API client
//! - `services`: Listings, caching, contact validation and relay
//! - `render`: HTML layout, components and pages
//! - `i18n`: Language selection and translation catalog
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod i18n;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod models;
pub mod render;
pub mod runtime;
pub mod services;
pub mod system;
pub mod utils;
