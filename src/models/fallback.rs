//! Static listings rendered when the content API is unreachable

use once_cell::sync::Lazy;

use super::{GalleryItem, Reference};

fn reference(id: &str, name: &str, industry: &str, description: &str, url: &str) -> Reference {
    Reference {
        id: id.to_string(),
        name: name.to_string(),
        industry: Some(industry.to_string()),
        description: Some(description.to_string()),
        logo_url: None,
        website_url: Some(url.to_string()),
        display_order: None,
        created_at: None,
    }
}

fn gallery(id: &str, title: &str, category: &str, description: &str) -> GalleryItem {
    GalleryItem {
        id: id.to_string(),
        title: title.to_string(),
        category: Some(category.to_string()),
        image_url: None,
        description: Some(description.to_string()),
        created_at: None,
    }
}

static FALLBACK_REFERENCES: Lazy<Vec<Reference>> = Lazy::new(|| {
    vec![
        reference("1", "Siemens Energy", "Energy & Power", "Precision turbine components", "https://siemens-energy.com"),
        reference("2", "Bosch Rexroth", "Industrial Automation", "Hydraulic system components", "https://boschrexroth.com"),
        reference("3", "MAN Truck & Bus", "Automotive", "Heavy-duty engine components", "https://man.eu"),
        reference("4", "ThyssenKrupp", "Steel & Materials", "Steel processing equipment parts", "https://thyssenkrupp.com"),
        reference("5", "ABB Ltd", "Electrical Equipment", "Motor housings and enclosures", "https://abb.com"),
        reference("6", "KUKA Robotics", "Robotics", "Robotic arm components", "https://kuka.com"),
        reference("7", "Liebherr", "Heavy Machinery", "Construction equipment parts", "https://liebherr.com"),
        reference("8", "Voith", "Industrial Technology", "Power transmission components", "https://voith.com"),
    ]
});

static FALLBACK_GALLERY: Lazy<Vec<GalleryItem>> = Lazy::new(|| {
    vec![
        gallery("1", "5-Axis CNC Milling Center", "Milling", "DMG MORI DMU 80 eVo"),
        gallery("2", "Precision Turning Operation", "Turning", "High-precision turning"),
        gallery("3", "Aerospace Component", "Parts", "Titanium aerospace part"),
        gallery("4", "Production Floor", "Factory", "Modern 2,500m² facility"),
        gallery("5", "Multi-Axis Machining", "Milling", "Complex geometry machining"),
        gallery("6", "Swiss-Type Turning", "Turning", "Small precision parts"),
        gallery("7", "Aluminum Housing", "Parts", "Anodized enclosure"),
        gallery("8", "Quality Lab", "Factory", "CMM inspection room"),
    ]
});

pub fn fallback_references() -> &'static [Reference] {
    &FALLBACK_REFERENCES
}

pub fn fallback_gallery() -> &'static [GalleryItem] {
    &FALLBACK_GALLERY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_ids_are_unique() {
        let refs: HashSet<_> = fallback_references().iter().map(|r| &r.id).collect();
        assert_eq!(refs.len(), fallback_references().len());
        let items: HashSet<_> = fallback_gallery().iter().map(|g| &g.id).collect();
        assert_eq!(items.len(), fallback_gallery().len());
    }

    #[test]
    fn test_every_fallback_item_has_a_category() {
        assert!(fallback_gallery().iter().all(|g| g.category.is_some()));
    }
}
