//! Content API client
//!
//! The site reads references and gallery items from, and relays contact
//! submissions to, an external HTTP API. [`ContentApi`] is the seam the
//! services depend on; [`HttpContentApi`] is the production implementation.

mod content_api;
mod http;

pub use content_api::ContentApi;
pub use http::HttpContentApi;

pub const REFERENCES_PATH: &str = "/api/references";
pub const GALLERY_PATH: &str = "/api/gallery";
pub const CONTACT_PATH: &str = "/api/contact";
