//! Contact form handlers

use std::sync::Arc;

use actix_multipart::{Field as MultipartField, Multipart};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use bytes::BytesMut;
use futures_util::StreamExt;
use tracing::{debug, info, warn};

use super::pages::{html, language, location};
use crate::config::SiteConfig;
use crate::errors::{Result, SiteError};
use crate::i18n::t;
use crate::models::Attachment;
use crate::render::pages::contact::{ContactView, render};
use crate::services::validation::validate_contact;
use crate::services::{ContactForm, ContactOutcome, ContactService, Field, FieldError};

/// Upper bound in bytes for a text field
const MAX_TEXT_FIELD_BYTES: usize = 16 * 1024;

/// Posted form plus whether the attachment went over the size limit
#[derive(Debug, Default)]
pub struct ParsedContact {
    pub form: ContactForm,
    pub attachment_too_large: bool,
}

async fn read_text(field: &mut MultipartField) -> Result<String> {
    let mut data = BytesMut::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        if data.len() + chunk.len() > MAX_TEXT_FIELD_BYTES {
            return Err(SiteError::payload_too_large(format!(
                "Form field exceeds {} KB",
                MAX_TEXT_FIELD_BYTES / 1024
            )));
        }
        data.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Read the attachment; `None` data means it went over `max_bytes`
///
/// Oversized files are drained up to twice the limit so the field error can
/// still be shown; anything larger is refused outright.
async fn read_file(field: &mut MultipartField, max_bytes: usize) -> Result<Option<BytesMut>> {
    let mut data = BytesMut::new();
    let mut total = 0usize;
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        total += chunk.len();
        if total > max_bytes.saturating_mul(2) {
            return Err(SiteError::payload_too_large(format!(
                "Attachment exceeds {} MB",
                max_bytes / (1024 * 1024)
            )));
        }
        if total <= max_bytes {
            data.extend_from_slice(&chunk);
        }
    }
    Ok((total <= max_bytes).then_some(data))
}

/// Parse the browser's multipart body into a [`ContactForm`]
pub async fn parse_contact_form(mut payload: Multipart, max_bytes: usize) -> Result<ParsedContact> {
    let mut parsed = ParsedContact::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            warn!("Failed to parse multipart field: {}", e);
            SiteError::invalid_multipart(format!("Invalid multipart data: {}", e))
        })?;

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "name" => parsed.form.name = read_text(&mut field).await?,
            "company" => parsed.form.company = read_text(&mut field).await?,
            "email" => parsed.form.email = read_text(&mut field).await?,
            "phone" => parsed.form.phone = read_text(&mut field).await?,
            "message" => parsed.form.message = read_text(&mut field).await?,
            "attachment" => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or_default()
                    .to_string();
                let content_type = field
                    .content_type()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                match read_file(&mut field, max_bytes).await? {
                    // browsers send an empty part when no file is chosen
                    Some(data) if filename.is_empty() && data.is_empty() => {}
                    Some(data) => {
                        parsed.form.attachment = Some(Attachment {
                            filename,
                            content_type,
                            data: data.freeze(),
                        })
                    }
                    None => {
                        debug!("Attachment {} over the size limit", filename);
                        parsed.attachment_too_large = true;
                    }
                }
            }
            other => {
                debug!("Ignoring multipart field {:?}", other);
                while let Some(chunk) = field.next().await {
                    chunk?;
                }
            }
        }
    }

    Ok(parsed)
}

pub struct ContactPage;

impl ContactPage {
    pub async fn form(
        req: HttpRequest,
        site: web::Data<SiteConfig>,
        contact: web::Data<Arc<ContactService>>,
    ) -> impl Responder {
        let lang = language(&req, &site);
        let max_mb = contact.max_attachment_bytes() / (1024 * 1024);
        html(
            StatusCode::OK,
            render(lang, location(&req), ContactView::empty(), max_mb),
        )
    }

    pub async fn submit(
        req: HttpRequest,
        payload: Multipart,
        site: web::Data<SiteConfig>,
        contact: web::Data<Arc<ContactService>>,
    ) -> Result<HttpResponse> {
        let lang = language(&req, &site);
        let max_bytes = contact.max_attachment_bytes();
        let max_mb = max_bytes / (1024 * 1024);

        let parsed = parse_contact_form(payload, max_bytes).await?;
        let form = parsed.form.clone();

        let outcome = if parsed.attachment_too_large {
            let mut errors = validate_contact(&parsed.form);
            errors.insert(Field::Attachment, FieldError::FileTooLarge { max_mb });
            ContactOutcome::Invalid(errors)
        } else {
            contact.submit(parsed.form).await
        };

        let response = match outcome {
            ContactOutcome::Invalid(errors) => {
                debug!("Contact form rejected: {:?}", errors.keys().collect::<Vec<_>>());
                html(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    render(
                        lang,
                        location(&req),
                        ContactView::Form {
                            form: &form,
                            errors: &errors,
                            failure: None,
                        },
                        max_mb,
                    ),
                )
            }
            ContactOutcome::Sent(reply) => {
                info!("Contact form delivered");
                html(
                    StatusCode::OK,
                    render(
                        lang,
                        location(&req),
                        ContactView::Sent {
                            message: &reply.message,
                        },
                        max_mb,
                    ),
                )
            }
            ContactOutcome::Failed(err) => {
                // only API-provided messages are shown verbatim
                let failure = if err.is_synthesized() || err.message.trim().is_empty() {
                    t(lang, "contact.error.generic").to_string()
                } else {
                    err.message.clone()
                };
                let errors = Default::default();
                html(
                    StatusCode::BAD_GATEWAY,
                    render(
                        lang,
                        location(&req),
                        ContactView::Form {
                            form: &form,
                            errors: &errors,
                            failure: Some(&failure),
                        },
                        max_mb,
                    ),
                )
            }
        };

        Ok(response)
    }
}
