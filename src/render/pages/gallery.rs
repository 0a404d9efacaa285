use std::fmt::Write;

use crate::i18n::{Language, lookup, t};
use crate::models::GalleryItem;
use crate::render::components::{filter_bar, image_or_initial, page_hero};
use crate::render::{Page, tx};
use crate::services::{ALL_CATEGORIES, GALLERY_CATEGORIES, filter_by_category};
use crate::utils::{escape_html, image_url};

/// Translated category label; categories the catalogue doesn't know show as-is
pub fn category_label(lang: Language, category: &str) -> &str {
    lookup(lang, &format!("gallery.category.{}", category)).unwrap_or(category)
}

fn category_href(category: &str) -> String {
    if category == ALL_CATEGORIES {
        "/gallery".to_string()
    } else {
        format!("/gallery?category={}", urlencoding::encode(category))
    }
}

pub fn render(
    lang: Language,
    location: &str,
    items: &[GalleryItem],
    selected: &str,
    api_base: &str,
) -> String {
    let mut body = page_hero(t(lang, "gallery.title"), t(lang, "gallery.intro"));
    body.push_str(r#"<section class="section"><div class="container">"#);

    body.push_str(&filter_bar(GALLERY_CATEGORIES.iter().map(|&c| {
        (category_href(c), category_label(lang, c), c == selected)
    })));

    let visible = filter_by_category(items, selected);
    if visible.is_empty() {
        let _ = write!(body, r#"<p class="hint">{}</p>"#, tx(lang, "gallery.empty"));
    } else {
        body.push_str(r#"<div class="grid">"#);
        for item in visible.iter() {
            let src = image_url(api_base, item.image_url.as_deref().unwrap_or_default());
            let _ = write!(
                body,
                r#"<a class="card gallery-item" href="/gallery/{}">{}<h3>{}</h3>"#,
                urlencoding::encode(&item.id),
                image_or_initial(&src, &item.title, "gallery-image"),
                escape_html(&item.title)
            );
            if let Some(category) = &item.category {
                let _ = write!(
                    body,
                    r#"<p class="hint">{}</p>"#,
                    escape_html(category_label(lang, category))
                );
            }
            body.push_str("</a>");
        }
        body.push_str("</div>");
    }
    body.push_str("</div></section>");

    Page::new(lang, location, t(lang, "gallery.title"), body).render()
}

/// Single item view
pub fn render_item(lang: Language, location: &str, item: &GalleryItem, api_base: &str) -> String {
    let src = image_url(api_base, item.image_url.as_deref().unwrap_or_default());
    let mut body = String::from(r#"<section class="section"><div class="container gallery-detail">"#);
    body.push_str(&image_or_initial(&src, &item.title, "gallery-image"));
    let _ = write!(body, "<h1>{}</h1>", escape_html(&item.title));
    if let Some(description) = &item.description {
        let _ = write!(body, "<p>{}</p>", escape_html(description));
    }
    if let Some(category) = &item.category {
        let _ = write!(
            body,
            r#"<p class="hint">{}: <a href="{}">{}</a></p>"#,
            tx(lang, "gallery.category"),
            escape_html(&category_href(category)),
            escape_html(category_label(lang, category))
        );
    }
    let _ = write!(
        body,
        r#"<p><a class="btn secondary" href="/gallery">{}</a></p></div></section>"#,
        tx(lang, "gallery.back")
    );

    Page::new(lang, location, &item.title, body).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fallback::fallback_gallery;

    #[test]
    fn test_category_labels() {
        assert_eq!(category_label(Language::Tr, "Milling"), "Frezeleme");
        assert_eq!(category_label(Language::En, "Welding"), "Welding");
    }

    #[test]
    fn test_filtered_gallery_shows_matching_items() {
        let html = render(Language::En, "/gallery?category=Turning", fallback_gallery(), "Turning", "");
        assert_eq!(html.matches(r#"class="card gallery-item""#).count(), 2);
        assert!(html.contains(r#"href="/gallery?category=Turning" class="active""#));
    }

    #[test]
    fn test_item_without_image_shows_initial() {
        let item = &fallback_gallery()[3];
        let html = render_item(Language::En, "/gallery/4", item, "http://api.test");
        assert!(html.contains("Production Floor"));
        assert!(html.contains(">P</div>"));
    }
}
