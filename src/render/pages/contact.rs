//! Contact page: form with inline errors, success panel, error banner

use std::fmt::Write;

use crate::i18n::{Language, t};
use crate::render::components::page_hero;
use crate::render::{Page, tx};
use crate::services::validation::ALLOWED_EXTENSIONS;
use crate::services::{ContactForm, Field, FieldErrors};
use crate::utils::escape_html;

pub enum ContactView<'a> {
    Form {
        form: &'a ContactForm,
        errors: &'a FieldErrors,
        /// Submission failure shown as a banner above the form
        failure: Option<&'a str>,
    },
    Sent {
        message: &'a str,
    },
}

impl ContactView<'static> {
    /// Blank form without errors
    pub fn empty() -> Self {
        static FORM: once_cell::sync::Lazy<ContactForm> = once_cell::sync::Lazy::new(ContactForm::default);
        static ERRORS: FieldErrors = FieldErrors::new();
        ContactView::Form {
            form: &FORM,
            errors: &ERRORS,
            failure: None,
        }
    }
}

fn field_error(html: &mut String, lang: Language, errors: &FieldErrors, field: Field) {
    if let Some(err) = errors.get(&field) {
        let _ = write!(
            html,
            r#"<p class="field-error" id="{}-error">{}</p>"#,
            field.as_ref(),
            escape_html(&err.localized(field, lang))
        );
    }
}

fn input(
    html: &mut String,
    lang: Language,
    errors: &FieldErrors,
    field: Field,
    kind: &str,
    value: &str,
    required: bool,
) {
    let name = field.as_ref();
    let invalid = errors.contains_key(&field);
    let _ = write!(
        html,
        r#"<div class="form-field{}"><label for="{name}">{label}{star}</label><input type="{kind}" id="{name}" name="{name}" value="{value}"{aria}>"#,
        if invalid { " invalid" } else { "" },
        name = name,
        label = tx(lang, &format!("contact.form.{}", name)),
        star = if required { " *" } else { "" },
        kind = kind,
        value = escape_html(value),
        aria = if invalid {
            format!(r#" aria-invalid="true" aria-describedby="{}-error""#, name)
        } else {
            String::new()
        },
    );
    field_error(html, lang, errors, field);
    html.push_str("</div>");
}

fn form_html(lang: Language, form: &ContactForm, errors: &FieldErrors, max_mb: usize) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(r#"<form class="contact-form" method="post" action="/contact" enctype="multipart/form-data" novalidate>"#);

    input(&mut html, lang, errors, Field::Name, "text", &form.name, true);
    input(&mut html, lang, errors, Field::Company, "text", &form.company, false);
    input(&mut html, lang, errors, Field::Email, "email", &form.email, true);
    input(&mut html, lang, errors, Field::Phone, "tel", &form.phone, false);

    let invalid = errors.contains_key(&Field::Message);
    let _ = write!(
        html,
        r#"<div class="form-field{}"><label for="message">{} *</label><textarea id="message" name="message" rows="6">{}</textarea>"#,
        if invalid { " invalid" } else { "" },
        tx(lang, "contact.form.message"),
        escape_html(&form.message)
    );
    field_error(&mut html, lang, errors, Field::Message);
    html.push_str("</div>");

    let accept = ALLOWED_EXTENSIONS
        .iter()
        .map(|e| format!(".{}", e))
        .collect::<Vec<_>>()
        .join(",");
    let hint = t(lang, "contact.form.attachmentHint")
        .replace("{types}", &ALLOWED_EXTENSIONS.join(", ").to_uppercase())
        .replace("{max}", &max_mb.to_string());
    let _ = write!(
        html,
        r#"<div class="form-field{}"><label for="attachment">{}</label><input type="file" id="attachment" name="attachment" accept="{}"><p class="hint">{}</p>"#,
        if errors.contains_key(&Field::Attachment) { " invalid" } else { "" },
        tx(lang, "contact.form.attachment"),
        accept,
        escape_html(&hint)
    );
    field_error(&mut html, lang, errors, Field::Attachment);
    html.push_str("</div>");

    let _ = write!(
        html,
        r#"<button class="btn" type="submit">{}</button></form>"#,
        tx(lang, "contact.form.submit")
    );
    html
}

fn contact_info(lang: Language) -> String {
    format!(
        r#"<aside class="card contact-info"><p><strong>{}</strong><br>{}</p><p><strong>{}</strong><br><a href="tel:+902165551234">+90 216 555 1234</a></p><p><strong>{}</strong><br><a href="mailto:info@emasmetal.com">info@emasmetal.com</a></p><p><strong>{}</strong><br>{}</p></aside>"#,
        tx(lang, "contact.info.address"),
        tx(lang, "footer.address"),
        tx(lang, "contact.info.phone"),
        tx(lang, "contact.info.email"),
        tx(lang, "contact.info.hours"),
        tx(lang, "footer.hours"),
    )
}

pub fn render(lang: Language, location: &str, view: ContactView<'_>, max_attachment_mb: usize) -> String {
    let mut body = page_hero(t(lang, "contact.title"), t(lang, "contact.intro"));
    body.push_str(r#"<section class="section"><div class="container grid">"#);
    body.push_str("<div>");

    match view {
        ContactView::Sent { message } => {
            let _ = write!(
                body,
                r#"<div class="alert success" role="status"><div><h2>{}</h2><p>{}</p><p>{}</p></div></div><a class="btn secondary" href="/contact">{}</a>"#,
                tx(lang, "contact.success.title"),
                tx(lang, "contact.success.text"),
                escape_html(message),
                tx(lang, "contact.success.again")
            );
        }
        ContactView::Form {
            form,
            errors,
            failure,
        } => {
            if let Some(failure) = failure {
                let _ = write!(
                    body,
                    r#"<div class="alert error" role="alert"><span>{}</span><a href="/contact" aria-label="{dismiss}">{dismiss}</a></div>"#,
                    escape_html(failure),
                    dismiss = tx(lang, "contact.error.dismiss")
                );
            }
            body.push_str(&form_html(lang, form, errors, max_attachment_mb));
        }
    }

    body.push_str("</div>");
    body.push_str(&contact_info(lang));
    body.push_str("</div></section>");

    Page::new(lang, location, t(lang, "contact.title"), body)
        .with_description(t(lang, "contact.intro"))
        .render()
}
