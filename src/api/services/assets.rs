use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder};
use tracing::{debug, trace};

use crate::render::static_asset;
use crate::utils::content_type_for;

const ASSET_CACHE_CONTROL: &str = "public, max-age=86400";

pub struct AssetService;

impl AssetService {
    /// 处理静态资源文件
    pub async fn handle_static(req: HttpRequest) -> impl Responder {
        let path = req.match_info().query("path");
        trace!("Serving static file: {}", path);

        match static_asset(path) {
            Some(content) => HttpResponse::Ok()
                .content_type(content_type_for(path))
                .insert_header((header::CACHE_CONTROL, ASSET_CACHE_CONTROL))
                .body(content.data.into_owned()),
            None => {
                debug!("Static file not found: {}", path);
                HttpResponse::NotFound().body("File not found")
            }
        }
    }

    pub async fn handle_favicon() -> impl Responder {
        match static_asset("favicon.svg") {
            Some(content) => HttpResponse::Ok()
                .content_type("image/svg+xml")
                .insert_header((header::CACHE_CONTROL, ASSET_CACHE_CONTROL))
                .body(content.data.into_owned()),
            None => HttpResponse::NoContent().finish(),
        }
    }
}
