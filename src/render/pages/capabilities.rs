use std::fmt::Write;

use crate::i18n::{Language, t};
use crate::render::components::{page_hero, section_header};
use crate::render::{Page, tx};
use crate::utils::escape_html;

struct Machine {
    name: &'static str,
    kind: &'static str,
    specs: &'static str,
    qty: u8,
}

const MACHINES: &[Machine] = &[
    Machine { name: "DMG MORI DMU 80 eVo", kind: "5-Axis Milling", specs: "800x650x550mm, 24,000 RPM", qty: 2 },
    Machine { name: "DMG MORI CMX 1100 V", kind: "3-Axis Milling", specs: "1100x560x510mm, 12,000 RPM", qty: 3 },
    Machine { name: "Mazak INTEGREX i-200", kind: "Multi-Tasking", specs: "Ø658mm, 1,500mm length", qty: 2 },
    Machine { name: "Mazak QT-250MY", kind: "CNC Turning", specs: "Ø366mm, Y-axis, live tooling", qty: 4 },
    Machine { name: "Citizen L20", kind: "Swiss Turning", specs: "Ø20mm bar capacity", qty: 2 },
    Machine { name: "Zeiss CONTURA", kind: "CMM", specs: "1000x1200x600mm, VAST XXT", qty: 1 },
];

const MATERIALS: &[(&str, &[&str])] = &[
    ("Aluminum Alloys", &["6061-T6", "7075-T6", "2024-T3", "5052-H32", "MIC-6"]),
    ("Steel & Stainless", &["304/316 SS", "17-4 PH", "4140", "4340", "A36"]),
    ("Exotic Alloys", &["Titanium Ti-6Al-4V", "Inconel 625/718", "Hastelloy", "Monel"]),
    ("Plastics", &["Delrin/Acetal", "PEEK", "UHMW", "Nylon", "PTFE"]),
    ("Copper Alloys", &["C110", "C360 Brass", "Bronze", "Beryllium Copper"]),
];

/// `(feature, standard, precision, high precision)`
const TOLERANCES: &[(&str, &str, &str, &str)] = &[
    ("Linear Dimensions", "±0.05mm", "±0.01mm", "±0.005mm"),
    ("Hole Diameters", "±0.025mm", "±0.013mm", "±0.005mm"),
    ("Flatness", "0.05mm", "0.02mm", "0.01mm"),
    ("Surface Finish", "Ra 3.2μm", "Ra 1.6μm", "Ra 0.8μm"),
    ("Concentricity", "0.05mm", "0.02mm", "0.01mm"),
    ("Angularity", "±0.5°", "±0.1°", "±0.05°"),
];

pub fn render(lang: Language, location: &str) -> String {
    let mut body = page_hero(t(lang, "capabilities.title"), t(lang, "capabilities.intro"));

    body.push_str(r#"<section class="section"><div class="container">"#);
    body.push_str(&section_header(t(lang, "capabilities.machines"), None));
    let _ = write!(
        body,
        "<table><thead><tr><th>{}</th><th>{}</th><th>{}</th><th>{}</th></tr></thead><tbody>",
        tx(lang, "capabilities.machine"),
        tx(lang, "capabilities.type"),
        tx(lang, "capabilities.specs"),
        tx(lang, "capabilities.qty"),
    );
    for m in MACHINES {
        let _ = write!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            m.name, m.kind, m.specs, m.qty
        );
    }
    body.push_str("</tbody></table></div></section>");

    body.push_str(r#"<section class="section alt"><div class="container">"#);
    body.push_str(&section_header(t(lang, "capabilities.materials"), None));
    body.push_str(r#"<div class="grid">"#);
    for (group, items) in MATERIALS {
        let _ = write!(body, r#"<div class="card"><h3>{}</h3><ul>"#, escape_html(group));
        for item in *items {
            let _ = write!(body, "<li>{}</li>", item);
        }
        body.push_str("</ul></div>");
    }
    body.push_str("</div></div></section>");

    body.push_str(r#"<section class="section"><div class="container">"#);
    body.push_str(&section_header(t(lang, "capabilities.tolerances"), None));
    let _ = write!(
        body,
        "<table><thead><tr><th>{}</th><th>{}</th><th>{}</th><th>{}</th></tr></thead><tbody>",
        tx(lang, "capabilities.feature"),
        tx(lang, "capabilities.standard"),
        tx(lang, "capabilities.precision"),
        tx(lang, "capabilities.highPrecision"),
    );
    for (feature, standard, precision, high) in TOLERANCES {
        let _ = write!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            feature, standard, precision, high
        );
    }
    body.push_str("</tbody></table></div></section>");

    Page::new(lang, location, t(lang, "capabilities.title"), body).render()
}
