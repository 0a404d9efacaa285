use std::fmt::Write;

use crate::i18n::{Language, t};
use crate::render::components::{card, section_header};
use crate::render::{Page, tx};

const INDUSTRIES: &[&str] = &[
    "Aerospace & Defense",
    "Automotive",
    "Medical Devices",
    "Energy & Power",
    "Industrial Machinery",
    "Electronics",
];

pub fn render(lang: Language, location: &str) -> String {
    let mut body = String::with_capacity(4096);

    let _ = write!(
        body,
        r#"<section class="hero"><div class="container"><h1>{}</h1><p>{}</p><p><a class="btn" href="/contact">{}</a> <a class="btn secondary" href="/services">{}</a></p></div></section>"#,
        tx(lang, "home.title"),
        tx(lang, "home.hero.subtitle"),
        tx(lang, "home.hero.cta"),
        tx(lang, "home.hero.secondary"),
    );

    body.push_str(r#"<section class="section"><div class="container stats">"#);
    for (value, key) in [
        ("15+", "home.stats.years"),
        ("25+", "home.stats.machines"),
        ("200+", "home.stats.clients"),
        ("±0.005mm", "home.stats.tolerance"),
    ] {
        let _ = write!(
            body,
            r#"<div class="stat"><strong>{}</strong>{}</div>"#,
            value,
            tx(lang, key)
        );
    }
    body.push_str("</div></section>");

    body.push_str(r#"<section class="section alt"><div class="container">"#);
    body.push_str(&section_header(t(lang, "home.why.title"), None));
    body.push_str(r#"<div class="grid">"#);
    for (title, text) in [
        ("home.why.precision", "home.why.precisionText"),
        ("home.why.turnaround", "home.why.turnaroundText"),
        ("home.why.materials", "home.why.materialsText"),
        ("home.why.quality", "home.why.qualityText"),
    ] {
        body.push_str(&card(t(lang, title), t(lang, text)));
    }
    body.push_str("</div></div></section>");

    body.push_str(r#"<section class="section"><div class="container">"#);
    body.push_str(&section_header(t(lang, "home.industries.title"), None));
    body.push_str(r#"<div class="filters">"#);
    for industry in INDUSTRIES {
        let _ = write!(body, "<span class=\"card\">{}</span>", crate::utils::escape_html(industry));
    }
    body.push_str("</div></div></section>");

    let _ = write!(
        body,
        r#"<section class="section alt"><div class="container section-header"><h2>{}</h2><p>{}</p><a class="btn" href="/contact">{}</a></div></section>"#,
        tx(lang, "home.cta.title"),
        tx(lang, "home.cta.text"),
        tx(lang, "nav.quote"),
    );

    Page::new(lang, location, t(lang, "home.title"), body).render()
}
