//! Language selection and translated strings
//!
//! The visitor's language comes from the `language` cookie, then from
//! `Accept-Language`, then from `site.default_language`.

mod catalog;

use actix_web::HttpRequest;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

pub use catalog::{ENTRIES, lookup, t};

/// Cookie that stores the visitor's language choice
pub const LANGUAGE_COOKIE: &str = "language";

/// One year, in seconds
pub const LANGUAGE_COOKIE_MAX_AGE: i64 = 365 * 24 * 60 * 60;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
        }
    }

    /// Name of the language in that language, for the switcher
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::Tr => "Türkçe",
            Self::En => "English",
        }
    }

    /// Pick the first supported language from an `Accept-Language` value
    ///
    /// Entries are ranked by their `q` weight; ties keep header order.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut ranked: Vec<(f32, usize, &str)> = header
            .split(',')
            .enumerate()
            .filter_map(|(idx, entry)| {
                let mut parts = entry.split(';');
                let tag = parts.next()?.trim();
                if tag.is_empty() {
                    return None;
                }
                let q = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                Some((q, idx, tag))
            })
            .filter(|(q, _, _)| *q > 0.0)
            .collect();

        ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));

        ranked.into_iter().find_map(|(_, _, tag)| {
            let primary = tag.split('-').next().unwrap_or(tag);
            primary.parse().ok()
        })
    }

    /// Resolve the language for a request
    pub fn from_request(req: &HttpRequest, default: Language) -> Self {
        if let Some(cookie) = req.cookie(LANGUAGE_COOKIE)
            && let Ok(lang) = cookie.value().parse()
        {
            return lang;
        }

        req.headers()
            .get(actix_web::http::header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .and_then(Self::from_accept_language)
            .unwrap_or(default)
    }

    pub fn all() -> impl Iterator<Item = Language> {
        Language::iter()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tr" => Ok(Self::Tr),
            "en" => Ok(Self::En),
            _ => Err(format!("Unsupported language: '{}'. Valid: tr, en", s)),
        }
    }
}
