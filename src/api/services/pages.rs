//! Page handlers
//!
//! Each handler resolves the visitor's language, loads whatever content the
//! page needs and returns the rendered document.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::trace;

use crate::config::SiteConfig;
use crate::i18n::Language;
use crate::render::pages;
use crate::services::{ContentService, selected_category};

/// `text/html` response with the given status
pub fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub fn language(req: &HttpRequest, site: &SiteConfig) -> Language {
    Language::from_request(req, site.default_language)
}

/// Path plus query of the current request
pub fn location(req: &HttpRequest) -> &str {
    req.uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
}

/// Translated 404 page
pub fn not_found_page(req: &HttpRequest, site: &SiteConfig) -> HttpResponse {
    let lang = language(req, site);
    html(
        StatusCode::NOT_FOUND,
        pages::error::render(lang, StatusCode::NOT_FOUND, ""),
    )
}

#[derive(Debug, Deserialize)]
pub struct ReferencesQuery {
    pub industry: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
}

pub struct PageService;

impl PageService {
    pub async fn home(req: HttpRequest, site: web::Data<SiteConfig>) -> impl Responder {
        let lang = language(&req, &site);
        html(StatusCode::OK, pages::home::render(lang, location(&req)))
    }

    pub async fn about(req: HttpRequest, site: web::Data<SiteConfig>) -> impl Responder {
        let lang = language(&req, &site);
        html(StatusCode::OK, pages::about::render(lang, location(&req)))
    }

    pub async fn mission_vision(req: HttpRequest, site: web::Data<SiteConfig>) -> impl Responder {
        let lang = language(&req, &site);
        html(
            StatusCode::OK,
            pages::mission_vision::render(lang, location(&req)),
        )
    }

    pub async fn services(req: HttpRequest, site: web::Data<SiteConfig>) -> impl Responder {
        let lang = language(&req, &site);
        html(StatusCode::OK, pages::services::render(lang, location(&req)))
    }

    pub async fn capabilities(req: HttpRequest, site: web::Data<SiteConfig>) -> impl Responder {
        let lang = language(&req, &site);
        html(
            StatusCode::OK,
            pages::capabilities::render(lang, location(&req)),
        )
    }

    pub async fn references(
        req: HttpRequest,
        query: web::Query<ReferencesQuery>,
        site: web::Data<SiteConfig>,
        content: web::Data<Arc<ContentService>>,
    ) -> impl Responder {
        let lang = language(&req, &site);
        let industry = query
            .industry
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        trace!("References page, industry={:?}", industry);

        let listing = content.references(industry).await;
        html(
            StatusCode::OK,
            pages::references::render(
                lang,
                location(&req),
                &listing,
                industry,
                content.api().base_url(),
            ),
        )
    }

    pub async fn gallery(
        req: HttpRequest,
        query: web::Query<GalleryQuery>,
        site: web::Data<SiteConfig>,
        content: web::Data<Arc<ContentService>>,
    ) -> impl Responder {
        let lang = language(&req, &site);
        let selected = selected_category(query.category.as_deref());

        let listing = content.gallery().await;
        html(
            StatusCode::OK,
            pages::gallery::render(
                lang,
                location(&req),
                &listing.items,
                selected,
                content.api().base_url(),
            ),
        )
    }

    pub async fn gallery_item(
        req: HttpRequest,
        id: web::Path<String>,
        site: web::Data<SiteConfig>,
        content: web::Data<Arc<ContentService>>,
    ) -> impl Responder {
        let lang = language(&req, &site);
        match content.gallery_item(&id).await {
            Some(item) => html(
                StatusCode::OK,
                pages::gallery::render_item(lang, location(&req), &item, content.api().base_url()),
            ),
            None => not_found_page(&req, &site),
        }
    }

    pub async fn certificates(req: HttpRequest, site: web::Data<SiteConfig>) -> impl Responder {
        let lang = language(&req, &site);
        html(
            StatusCode::OK,
            pages::certificates::render(lang, location(&req)),
        )
    }

    pub async fn not_found(req: HttpRequest, site: web::Data<SiteConfig>) -> impl Responder {
        trace!("No route for {}", req.path());
        not_found_page(&req, &site)
    }
}
