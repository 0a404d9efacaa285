//! Page shell: document head, navbar, language switcher, footer

use std::fmt::Write;

use once_cell::sync::Lazy;
use tracing::warn;

use super::{SiteAssets, tx};
use crate::i18n::{Language, t};
use crate::utils::escape_html;

/// Navigation entries as `(path, translation key)`, in menu order
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "nav.home"),
    ("/about", "nav.about"),
    ("/mission-vision", "nav.missionVision"),
    ("/services", "nav.services"),
    ("/capabilities", "nav.capabilities"),
    ("/references", "nav.references"),
    ("/gallery", "nav.gallery"),
    ("/certificates", "nav.certificates"),
    ("/contact", "nav.contact"),
];

static LAYOUT: Lazy<String> = Lazy::new(|| match SiteAssets::get("templates/layout.html") {
    Some(file) => String::from_utf8_lossy(&file.data).into_owned(),
    None => {
        warn!("Embedded layout template missing, using compiled-in copy");
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/templates/layout.html"))
            .to_string()
    }
});

/// Whether the nav link `link` is active for the request path `current`
///
/// `/` only matches itself; other links also match their sub-paths.
pub fn is_active(link: &str, current: &str) -> bool {
    let current = current.split(['?', '#']).next().unwrap_or(current);
    if link == "/" {
        return current == "/";
    }
    current == link
        || current
            .strip_prefix(link)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// A page ready to be wrapped in the layout
pub struct Page<'a> {
    pub lang: Language,
    /// Request path and query, used for the active link and the switcher
    pub location: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub body: String,
}

impl<'a> Page<'a> {
    pub fn new(lang: Language, location: &'a str, title: &'a str, body: String) -> Self {
        Self {
            lang,
            location,
            title,
            description: None,
            body,
        }
    }

    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn render(self) -> String {
        let canonical = crate::config::try_get_config()
            .and_then(|c| c.site.public_url.clone())
            .map(|base| {
                let path = self.location.split('?').next().unwrap_or("/");
                format!(
                    r#"<link rel="canonical" href="{}{}">"#,
                    escape_html(base.trim_end_matches('/')),
                    escape_html(path)
                )
            })
            .unwrap_or_default();

        let description = self
            .description
            .unwrap_or_else(|| t(self.lang, "footer.tagline"));

        let navbar = navbar(self.lang, self.location);
        let footer = footer(self.lang);
        let title = escape_html(self.title);
        let description = escape_html(description);

        fill_template(&LAYOUT, |name| match name {
            "LANG" => Some(self.lang.code()),
            "TITLE" => Some(title.as_ref()),
            "DESCRIPTION" => Some(description.as_ref()),
            "CANONICAL" => Some(canonical.as_str()),
            "VERSION" => Some(env!("CARGO_PKG_VERSION")),
            "NAVBAR" => Some(navbar.as_str()),
            "FOOTER" => Some(footer.as_str()),
            "CONTENT" => Some(self.body.as_str()),
            _ => None,
        })
    }
}

/// Substitute `%NAME%` placeholders in a single pass over `template`
///
/// Inserted values are never scanned again, so placeholder-looking text in
/// titles or API data stays literal. Unknown names are left as they are.
pub fn fill_template<'v>(template: &str, value: impl Fn(&str) -> Option<&'v str>) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('%') else {
            rest = &rest[start..];
            break;
        };

        let name = &after[..end];
        let is_name = !name.is_empty() && name.bytes().all(|b| b.is_ascii_uppercase() || b == b'_');
        match is_name.then(|| value(name)).flatten() {
            Some(v) => {
                out.push_str(v);
                rest = &after[end + 1..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

pub fn navbar(lang: Language, location: &str) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<header class="navbar"><nav class="container" aria-label="main">"#);
    html.push_str(
        r#"<a class="brand" href="/"><span class="brand-mark">E</span><span>EMAS Metal</span></a>"#,
    );
    // mobile menu starts closed
    let _ = write!(
        html,
        r#"<input type="checkbox" id="nav-toggle" class="nav-toggle"><label for="nav-toggle" class="nav-toggle-label" aria-label="{menu}">&#9776; {menu}</label>"#,
        menu = tx(lang, "nav.menu")
    );

    html.push_str(r#"<ul class="nav-links">"#);
    for (path, key) in NAV_LINKS {
        let active = is_active(path, location);
        let _ = write!(
            html,
            r#"<li><a href="{}"{}>{}</a></li>"#,
            path,
            if active {
                r#" class="active" aria-current="page""#
            } else {
                ""
            },
            tx(lang, key)
        );
    }
    html.push_str("</ul>");
    html.push_str(&language_switcher(lang, location));
    html.push_str("</nav></header>");
    html
}

pub fn language_switcher(current: Language, location: &str) -> String {
    let next = urlencoding::encode(location);
    let mut html = format!(
        r#"<div class="lang-switcher" aria-label="{}">"#,
        tx(current, "nav.language")
    );
    for lang in Language::all() {
        let _ = write!(
            html,
            r#"<a href="/lang/{code}?next={next}" hreflang="{code}" lang="{code}"{active}>{name}</a>"#,
            code = lang.code(),
            next = next,
            active = if lang == current { r#" class="active""# } else { "" },
            name = lang.native_name()
        );
    }
    html.push_str("</div>");
    html
}

pub fn footer(lang: Language) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<footer class="footer"><div class="container grid">"#);

    let _ = write!(
        html,
        r#"<div><a class="brand" href="/"><span class="brand-mark">E</span><span>EMAS Metal</span></a><p>{}</p></div>"#,
        tx(lang, "footer.tagline")
    );

    let _ = write!(html, "<div><h3>{}</h3><ul>", tx(lang, "footer.quickLinks"));
    for (path, key) in NAV_LINKS.iter().skip(1) {
        let _ = write!(html, r#"<li><a href="{}">{}</a></li>"#, path, tx(lang, key));
    }
    html.push_str("</ul></div>");

    let _ = write!(html, "<div><h3>{}</h3><ul>", tx(lang, "footer.services"));
    for key in [
        "services.milling.title",
        "services.turning.title",
        "services.prototyping.title",
        "services.inspection.title",
    ] {
        let _ = write!(html, "<li>{}</li>", tx(lang, key));
    }
    html.push_str("</ul></div>");

    let _ = write!(
        html,
        r#"<div><h3>{}</h3><ul><li>{}</li><li><a href="tel:+902165551234">+90 216 555 1234</a></li><li><a href="mailto:info@emasmetal.com">info@emasmetal.com</a></li><li>{}</li></ul></div>"#,
        tx(lang, "footer.contact"),
        tx(lang, "footer.address"),
        tx(lang, "footer.hours")
    );

    let _ = write!(
        html,
        r#"</div><div class="container footer-bottom">&copy; {} EMAS Metal. {}</div></footer>"#,
        chrono::Utc::now().format("%Y"),
        tx(lang, "footer.rights")
    );
    html
}
