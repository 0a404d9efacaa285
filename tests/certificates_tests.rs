//! Certificate download tests

use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use tempfile::TempDir;

use emasmetal::api::services::CertificateService;
use emasmetal::config::SiteConfig;
use emasmetal::models::CERTIFICATES;

fn site_config(dir: &TempDir) -> SiteConfig {
    SiteConfig {
        certificates_dir: dir.path().to_string_lossy().into_owned(),
        ..SiteConfig::default()
    }
}

macro_rules! cert_app {
    ($site:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($site))
                .route(
                    "/certificates/{file}",
                    web::get().to(CertificateService::download),
                ),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_listed_certificate_is_served_inline() {
    let dir = TempDir::new().expect("temp dir");
    let cert = &CERTIFICATES[0];
    std::fs::write(dir.path().join(cert.file), b"%PDF-1.7 test").expect("write pdf");
    let app = cert_app!(site_config(&dir));

    let req = TestRequest::get()
        .uri(&format!("/certificates/{}", cert.file))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.starts_with("inline"));
    assert_eq!(test::read_body(resp).await.as_ref(), b"%PDF-1.7 test");
}

#[actix_rt::test]
async fn test_listed_certificate_missing_on_disk() {
    let dir = TempDir::new().expect("temp dir");
    let app = cert_app!(site_config(&dir));

    let req = TestRequest::get()
        .uri(&format!("/certificates/{}", CERTIFICATES[1].file))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_unlisted_files_are_not_served() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("secret.pdf"), b"nope").expect("write");
    let app = cert_app!(site_config(&dir));

    for uri in ["/certificates/secret.pdf", "/certificates/..%2Fetc%2Fpasswd"] {
        let req = TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}
