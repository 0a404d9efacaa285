use std::fmt::Write;

use crate::i18n::{Language, t};
use crate::render::components::{card, page_hero, section_header};
use crate::render::{Page, tx};

const VALUES: &[&str] = &[
    "mission.values.quality",
    "mission.values.reliability",
    "mission.values.innovation",
    "mission.values.sustainability",
];

pub fn render(lang: Language, location: &str) -> String {
    let mut body = page_hero(t(lang, "mission.title"), t(lang, "about.intro"));

    body.push_str(r#"<section class="section"><div class="container grid">"#);
    body.push_str(&card(t(lang, "mission.mission.title"), t(lang, "mission.mission.text")));
    body.push_str(&card(t(lang, "mission.vision.title"), t(lang, "mission.vision.text")));
    body.push_str("</div></section>");

    body.push_str(r#"<section class="section alt"><div class="container">"#);
    body.push_str(&section_header(t(lang, "mission.values.title"), None));
    body.push_str(r#"<div class="grid">"#);
    for key in VALUES {
        let _ = write!(body, r#"<div class="card"><h3>{}</h3></div>"#, tx(lang, key));
    }
    body.push_str("</div></div></section>");

    Page::new(lang, location, t(lang, "mission.title"), body).render()
}
