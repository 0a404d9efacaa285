//! Service layer for business logic
//!
//! Handlers only talk to these types; the content API sits behind
//! [`crate::client::ContentApi`].

mod contact_service;
mod content_service;
pub mod gallery_filter;
pub mod validation;

pub use contact_service::{ContactOutcome, ContactService};
pub use content_service::{ContentService, ContentSource, Listing};
pub use gallery_filter::{ALL_CATEGORIES, GALLERY_CATEGORIES, filter_by_category, selected_category};
pub use validation::{ContactForm, Field, FieldError, FieldErrors};
