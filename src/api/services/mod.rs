pub mod assets;
pub mod certificates;
pub mod contact;
pub mod health;
pub mod language;
pub mod pages;

use actix_web::web;

pub use assets::AssetService;
pub use certificates::CertificateService;
pub use contact::ContactPage;
pub use health::{AppStartTime, HealthService, health_routes};
pub use language::LanguageService;
pub use pages::PageService;

/// Register every site route
///
/// Expects `web::Data` for `SiteConfig`, `Arc<ContentService>`,
/// `Arc<ContactService>` and `AppStartTime`.
pub fn site_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_routes())
        .route("/", web::get().to(PageService::home))
        .route("/about", web::get().to(PageService::about))
        .route("/mission-vision", web::get().to(PageService::mission_vision))
        .route("/services", web::get().to(PageService::services))
        .route("/capabilities", web::get().to(PageService::capabilities))
        .route("/references", web::get().to(PageService::references))
        .route("/gallery", web::get().to(PageService::gallery))
        .route("/gallery/{id}", web::get().to(PageService::gallery_item))
        .route("/certificates", web::get().to(PageService::certificates))
        .route(
            "/certificates/{file}",
            web::get().to(CertificateService::download),
        )
        .route("/contact", web::get().to(ContactPage::form))
        .route("/contact", web::post().to(ContactPage::submit))
        .route("/lang/{code}", web::get().to(LanguageService::switch))
        .route("/assets/{path:.*}", web::get().to(AssetService::handle_static))
        .route("/favicon.svg", web::get().to(AssetService::handle_favicon))
        .default_service(web::to(PageService::not_found));
}
