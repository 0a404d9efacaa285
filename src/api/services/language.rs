use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::debug;

use super::pages::{html, language};
use crate::config::SiteConfig;
use crate::i18n::{LANGUAGE_COOKIE, LANGUAGE_COOKIE_MAX_AGE, Language};
use crate::render::pages;
use crate::utils::local_redirect_target;

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    pub next: Option<String>,
}

pub struct LanguageService;

impl LanguageService {
    /// `GET /lang/{code}?next=/path`: remember the choice and go back
    pub async fn switch(
        req: HttpRequest,
        code: web::Path<String>,
        query: web::Query<LanguageQuery>,
        site: web::Data<SiteConfig>,
    ) -> impl Responder {
        let lang: Language = match code.parse() {
            Ok(lang) => lang,
            Err(e) => {
                debug!("Rejected language switch: {}", e);
                let current = language(&req, &site);
                return html(
                    StatusCode::BAD_REQUEST,
                    pages::error::render(current, StatusCode::BAD_REQUEST, &e),
                );
            }
        };

        let target = local_redirect_target(query.next.as_deref());
        debug!("Language set to {}, redirecting to {}", lang, target);

        let cookie = Cookie::build(LANGUAGE_COOKIE, lang.code())
            .path("/")
            .max_age(Duration::seconds(LANGUAGE_COOKIE_MAX_AGE))
            .same_site(SameSite::Lax)
            .finish();

        HttpResponse::SeeOther()
            .cookie(cookie)
            .insert_header((header::LOCATION, target))
            .finish()
    }
}
