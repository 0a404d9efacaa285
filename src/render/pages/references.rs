use std::fmt::Write;

use crate::i18n::{Language, t};
use crate::models::Reference;
use crate::models::fallback::fallback_references;
use crate::render::components::{external_link, filter_bar, image_or_initial, page_hero};
use crate::render::{Page, tx};
use crate::services::Listing;
use crate::utils::{escape_html, image_url};

/// Industries for the filter bar: known ones first, then any new ones from
/// the listing, each once
fn industries(items: &[Reference]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for industry in fallback_references()
        .iter()
        .chain(items.iter())
        .filter_map(|r| r.industry.as_deref())
    {
        if !out.contains(&industry) {
            out.push(industry);
        }
    }
    out
}

fn reference_card(reference: &Reference, lang: Language, api_base: &str) -> String {
    let logo = image_url(api_base, reference.logo_url.as_deref().unwrap_or_default());
    let mut html = String::from(r#"<article class="card reference">"#);
    html.push_str(&image_or_initial(&logo, &reference.name, "logo-placeholder"));
    let _ = write!(html, "<h3>{}</h3>", escape_html(&reference.name));
    if let Some(industry) = &reference.industry {
        let _ = write!(html, r#"<p class="hint">{}</p>"#, escape_html(industry));
    }
    if let Some(description) = &reference.description {
        let _ = write!(html, "<p>{}</p>", escape_html(description));
    }
    html.push_str(&external_link(
        reference.website_url.as_deref(),
        t(lang, "references.visit"),
    ));
    html.push_str("</article>");
    html
}

pub fn render(
    lang: Language,
    location: &str,
    listing: &Listing<Reference>,
    industry: Option<&str>,
    api_base: &str,
) -> String {
    let mut body = page_hero(t(lang, "references.title"), t(lang, "references.intro"));
    body.push_str(r#"<section class="section"><div class="container">"#);

    let all = (
        "/references".to_string(),
        t(lang, "references.allIndustries"),
        industry.is_none(),
    );
    let chips = industries(&listing.items)
        .into_iter()
        .map(|name| {
            (
                format!("/references?industry={}", urlencoding::encode(name)),
                name,
                industry == Some(name),
            )
        })
        .collect::<Vec<_>>();
    body.push_str(&filter_bar(std::iter::once(all).chain(chips)));

    if listing.items.is_empty() {
        let _ = write!(body, r#"<p class="hint">{}</p>"#, tx(lang, "references.empty"));
    } else {
        body.push_str(r#"<div class="grid">"#);
        for reference in listing.items.iter() {
            body.push_str(&reference_card(reference, lang, api_base));
        }
        body.push_str("</div>");
    }
    body.push_str("</div></section>");

    Page::new(lang, location, t(lang, "references.title"), body).render()
}
