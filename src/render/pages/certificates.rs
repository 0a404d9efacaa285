use std::fmt::Write;

use crate::i18n::{Language, t};
use crate::models::CERTIFICATES;
use crate::render::components::page_hero;
use crate::render::{Page, tx};

pub fn render(lang: Language, location: &str) -> String {
    let mut body = page_hero(t(lang, "certificates.title"), t(lang, "certificates.intro"));
    body.push_str(r#"<section class="section"><div class="container grid">"#);

    for cert in CERTIFICATES {
        let _ = write!(
            body,
            r#"<article class="card certificate" id="cert-{id}"><h3>{name}</h3><p><strong>{title}</strong></p><p>{description}</p><p class="hint">{issuer_label}: {issuer} &middot; {valid_label}: {valid}</p><p><a class="btn" href="/certificates/{file}" target="_blank" rel="noopener">{view}</a> <a class="btn secondary" href="/certificates/{file}" download>{download}</a></p></article>"#,
            id = cert.id,
            name = cert.name,
            title = cert.title(lang),
            description = cert.description(lang),
            issuer_label = tx(lang, "certificates.issuer"),
            issuer = cert.issuer,
            valid_label = tx(lang, "certificates.validUntil"),
            valid = cert.valid_until,
            file = cert.file,
            view = tx(lang, "certificates.view"),
            download = tx(lang, "certificates.download"),
        );
    }
    body.push_str("</div></section>");

    Page::new(lang, location, t(lang, "certificates.title"), body).render()
}
