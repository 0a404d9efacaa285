use crate::i18n::{Language, t};
use crate::render::Page;
use crate::render::components::{card, page_hero};

/// `(title key, text key)` per service, in display order
pub const SERVICES: &[(&str, &str)] = &[
    ("services.milling.title", "services.milling.text"),
    ("services.turning.title", "services.turning.text"),
    ("services.prototyping.title", "services.prototyping.text"),
    ("services.assembly.title", "services.assembly.text"),
    ("services.inspection.title", "services.inspection.text"),
    ("services.finishing.title", "services.finishing.text"),
];

pub fn render(lang: Language, location: &str) -> String {
    let mut body = page_hero(t(lang, "services.title"), t(lang, "services.intro"));
    body.push_str(r#"<section class="section"><div class="container grid">"#);
    for (title, text) in SERVICES {
        body.push_str(&card(t(lang, title), t(lang, text)));
    }
    body.push_str("</div></section>");

    Page::new(lang, location, t(lang, "services.title"), body)
        .with_description(t(lang, "services.intro"))
        .render()
}
