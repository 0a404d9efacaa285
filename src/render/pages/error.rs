use actix_web::http::StatusCode;

use crate::i18n::{Language, t};
use crate::render::{Page, tx};
use crate::utils::escape_html;

/// Error page for `status`; `detail` is shown under the heading when non-empty
pub fn render(lang: Language, status: StatusCode, detail: &str) -> String {
    let (title, text) = if status == StatusCode::NOT_FOUND {
        ("error.notFound.title", t(lang, "error.notFound.text"))
    } else {
        ("error.generic.title", detail)
    };

    let body = format!(
        r#"<section class="section"><div class="container section-header"><p class="hint">{}</p><h1>{}</h1><p>{}</p><a class="btn" href="/">{}</a></div></section>"#,
        status.as_u16(),
        tx(lang, title),
        escape_html(text),
        tx(lang, "error.back"),
    );

    Page::new(lang, "", t(lang, title), body).render()
}
