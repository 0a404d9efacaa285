use crate::i18n::{Language, t};
use crate::render::Page;
use crate::render::components::{card, page_hero};

pub fn render(lang: Language, location: &str) -> String {
    let mut body = page_hero(t(lang, "about.title"), t(lang, "about.intro"));
    body.push_str(r#"<section class="section"><div class="container grid">"#);
    body.push_str(&card(t(lang, "about.history.title"), t(lang, "about.history.text")));
    body.push_str(&card(t(lang, "about.team.title"), t(lang, "about.team.text")));
    body.push_str(&card(t(lang, "home.why.quality"), t(lang, "home.why.qualityText")));
    body.push_str("</div></section>");

    Page::new(lang, location, t(lang, "about.title"), body)
        .with_description(t(lang, "about.intro"))
        .render()
}
