use std::borrow::Cow;

use crate::models::GalleryItem;

/// Sentinel category that disables filtering
pub const ALL_CATEGORIES: &str = "All";

/// Categories offered in the gallery filter bar, in display order
pub const GALLERY_CATEGORIES: &[&str] = &[ALL_CATEGORIES, "Milling", "Turning", "Parts", "Factory"];

/// Keep the items whose category equals `selected`
///
/// `"All"` hands back the input slice itself. Input order is preserved.
pub fn filter_by_category<'a>(items: &'a [GalleryItem], selected: &str) -> Cow<'a, [GalleryItem]> {
    if selected == ALL_CATEGORIES {
        return Cow::Borrowed(items);
    }

    Cow::Owned(
        items
            .iter()
            .filter(|item| item.category.as_deref() == Some(selected))
            .cloned()
            .collect(),
    )
}

/// Category from the `?category=` query value; missing or blank means "All"
pub fn selected_category(query: Option<&str>) -> &str {
    match query.map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => ALL_CATEGORIES,
    }
}
