//! Contact form validation
//!
//! Errors are collected per field and rendered inline; nothing that fails
//! here is sent to the content API.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use strum::AsRefStr;

use crate::i18n::{Language, t};
use crate::models::{Attachment, ContactSubmission};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

pub const MIN_MESSAGE_CHARS: usize = 10;
pub const MAX_MESSAGE_CHARS: usize = 2000;
pub const MAX_NAME_CHARS: usize = 255;
pub const MAX_COMPANY_CHARS: usize = 255;
pub const MAX_EMAIL_CHARS: usize = 255;
pub const MAX_PHONE_CHARS: usize = 50;

/// Attachment extensions the API accepts for technical drawings
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "dwg", "dxf", "step", "stp", "png", "jpg", "jpeg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Company,
    Email,
    Phone,
    Message,
    Attachment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort { min: usize },
    TooLong { max: usize },
    FileType,
    FileTooLarge { max_mb: usize },
}

impl FieldError {
    /// Translated, human readable message
    pub fn localized(&self, field: Field, lang: Language) -> String {
        match self {
            FieldError::Required => match field {
                Field::Name => t(lang, "contact.error.nameRequired").to_string(),
                Field::Email => t(lang, "contact.error.emailRequired").to_string(),
                Field::Message => t(lang, "contact.error.messageRequired").to_string(),
                _ => t(lang, "contact.error.required").to_string(),
            },
            FieldError::InvalidEmail => t(lang, "contact.error.emailInvalid").to_string(),
            FieldError::TooShort { min } => {
                t(lang, "contact.error.messageTooShort").replace("{min}", &min.to_string())
            }
            FieldError::TooLong { max } => {
                t(lang, "contact.error.tooLong").replace("{max}", &max.to_string())
            }
            FieldError::FileType => t(lang, "contact.error.fileType")
                .replace("{types}", &ALLOWED_EXTENSIONS.join(", ").to_uppercase()),
            FieldError::FileTooLarge { max_mb } => {
                t(lang, "contact.error.fileTooLarge").replace("{max}", &max_mb.to_string())
            }
        }
    }
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

/// Raw values as posted by the browser
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub attachment: Option<Attachment>,
}

impl ContactForm {
    /// Trimmed submission; blank optional fields become `None`
    pub fn to_submission(&self) -> ContactSubmission {
        fn optional(value: &str) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        ContactSubmission {
            name: self.name.trim().to_string(),
            company: optional(&self.company),
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            message: self.message.trim().to_string(),
        }
    }
}

fn check_max(errors: &mut FieldErrors, field: Field, value: &str, max: usize) {
    if !errors.contains_key(&field) && value.trim().chars().count() > max {
        errors.insert(field, FieldError::TooLong { max });
    }
}

/// Validate the text fields of a contact form
pub fn validate_contact(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::Required);
    }

    if form.email.trim().is_empty() {
        errors.insert(Field::Email, FieldError::Required);
    } else if !EMAIL_RE.is_match(&form.email) {
        errors.insert(Field::Email, FieldError::InvalidEmail);
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, FieldError::Required);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(
            Field::Message,
            FieldError::TooShort {
                min: MIN_MESSAGE_CHARS,
            },
        );
    }

    check_max(&mut errors, Field::Name, &form.name, MAX_NAME_CHARS);
    check_max(&mut errors, Field::Company, &form.company, MAX_COMPANY_CHARS);
    check_max(&mut errors, Field::Email, &form.email, MAX_EMAIL_CHARS);
    check_max(&mut errors, Field::Phone, &form.phone, MAX_PHONE_CHARS);
    check_max(&mut errors, Field::Message, &form.message, MAX_MESSAGE_CHARS);

    errors
}

/// Check an uploaded file against the allowed types and size
pub fn validate_attachment(attachment: &Attachment, max_bytes: usize) -> Option<FieldError> {
    let allowed = attachment
        .extension()
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));
    if !allowed {
        return Some(FieldError::FileType);
    }

    if attachment.size() > max_bytes {
        return Some(FieldError::FileTooLarge {
            max_mb: max_bytes / (1024 * 1024),
        });
    }

    None
}

/// Full form validation, attachment included
pub fn validate_form(form: &ContactForm, max_attachment_bytes: usize) -> FieldErrors {
    let mut errors = validate_contact(form);
    if let Some(att) = &form.attachment
        && let Some(err) = validate_attachment(att, max_attachment_bytes)
    {
        errors.insert(Field::Attachment, err);
    }
    errors
}
