//! Server-side HTML rendering
//!
//! Every page is the embedded layout template with the navbar, footer and a
//! page body substituted in. All text that does not come from this crate
//! passes through [`crate::utils::escape_html`].

pub mod components;
pub mod layout;
pub mod pages;

use rust_embed::Embed;

pub use layout::{NAV_LINKS, Page, is_active};

// templates and static assets are embedded with RustEmbed
#[derive(Embed)]
#[folder = "assets/"]
pub struct SiteAssets;

/// Static file from `assets/static/`
pub fn static_asset(path: &str) -> Option<rust_embed::EmbeddedFile> {
    SiteAssets::get(&format!("static/{}", path))
}

/// Translated text, escaped for HTML
pub fn tx(lang: crate::i18n::Language, key: &str) -> std::borrow::Cow<'_, str> {
    crate::utils::escape_html(crate::i18n::t(lang, key))
}
