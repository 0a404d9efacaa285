use std::sync::Arc;

use tracing::{info, warn};

use super::validation::{ContactForm, FieldErrors, validate_form};
use crate::client::ContentApi;
use crate::models::{ApiError, ContactResponse};

/// Result of a contact form submission
#[derive(Debug, Clone)]
pub enum ContactOutcome {
    /// Rejected locally; nothing was sent
    Invalid(FieldErrors),
    Sent(ContactResponse),
    Failed(ApiError),
}

/// Validates contact forms and relays accepted ones to the content API
pub struct ContactService {
    api: Arc<dyn ContentApi>,
    max_attachment_bytes: usize,
}

impl ContactService {
    pub fn new(api: Arc<dyn ContentApi>, max_attachment_bytes: usize) -> Self {
        Self {
            api,
            max_attachment_bytes,
        }
    }

    pub fn max_attachment_bytes(&self) -> usize {
        self.max_attachment_bytes
    }

    pub async fn submit(&self, form: ContactForm) -> ContactOutcome {
        let errors = validate_form(&form, self.max_attachment_bytes);
        if !errors.is_empty() {
            return ContactOutcome::Invalid(errors);
        }

        let submission = form.to_submission();
        match self.api.submit_contact(&submission, form.attachment).await {
            Ok(response) => {
                info!(
                    "Contact message accepted (reference: {})",
                    response.reference_id.as_deref().unwrap_or("-")
                );
                ContactOutcome::Sent(response)
            }
            Err(e) => {
                warn!("Contact message rejected: {}", e);
                ContactOutcome::Failed(e)
            }
        }
    }
}
