//! Building blocks shared by the page bodies

use std::fmt::Write;

use crate::utils::{escape_html, initial, safe_external_link};

pub fn page_hero(title: &str, subtitle: &str) -> String {
    format!(
        r#"<section class="page-hero"><div class="container"><h1>{}</h1><p>{}</p></div></section>"#,
        escape_html(title),
        escape_html(subtitle)
    )
}

pub fn section_header(title: &str, subtitle: Option<&str>) -> String {
    let mut html = format!(r#"<div class="section-header"><h2>{}</h2>"#, escape_html(title));
    if let Some(subtitle) = subtitle {
        let _ = write!(html, "<p>{}</p>", escape_html(subtitle));
    }
    html.push_str("</div>");
    html
}

/// Title and text card
pub fn card(title: &str, text: &str) -> String {
    format!(
        r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#,
        escape_html(title),
        escape_html(text)
    )
}

/// Image when `src` is non-empty, else the first letter of `name`
pub fn image_or_initial(src: &str, name: &str, class: &str) -> String {
    if src.is_empty() {
        format!(
            r#"<div class="placeholder {}" aria-hidden="true">{}</div>"#,
            class,
            escape_html(&initial(name))
        )
    } else {
        format!(
            r#"<img class="{}" src="{}" alt="{}" loading="lazy">"#,
            class,
            escape_html(src),
            escape_html(name)
        )
    }
}

/// Outbound link; unsafe or missing URLs render nothing
pub fn external_link(url: Option<&str>, label: &str) -> String {
    match safe_external_link(url) {
        Some(href) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(href),
            escape_html(label)
        ),
        None => String::new(),
    }
}

/// Filter chip row; `chips` is `(href, label, active)`
pub fn filter_bar<'a>(chips: impl IntoIterator<Item = (String, &'a str, bool)>) -> String {
    let mut html = String::from(r#"<nav class="filters">"#);
    for (href, label, active) in chips {
        let _ = write!(
            html,
            r#"<a href="{}"{}>{}</a>"#,
            escape_html(&href),
            if active { r#" class="active""# } else { "" },
            escape_html(label)
        );
    }
    html.push_str("</nav>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_uses_initial() {
        let html = image_or_initial("", "Voith", "logo");
        assert!(html.contains(">V</div>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_external_link_drops_javascript() {
        assert_eq!(external_link(Some("javascript:alert(1)"), "x"), "");
        assert!(external_link(Some("https://voith.com"), "Visit").contains("noopener"));
    }

    #[test]
    fn test_filter_bar_escapes_labels() {
        let html = filter_bar([("/references?industry=A%26B".to_string(), "A & B", true)]);
        assert!(html.contains("A &amp; B"));
        assert!(html.contains(r#"class="active""#));
    }
}
