//! SiteError tests

use actix_web::ResponseError;
use actix_web::http::StatusCode;

use emasmetal::errors::SiteError;
use emasmetal::models::ApiError;

#[test]
fn test_status_mapping() {
    assert_eq!(
        SiteError::config("x").status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        SiteError::not_found("x").status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        SiteError::invalid_multipart("x").status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        SiteError::payload_too_large("x").status_code(),
        StatusCode::PAYLOAD_TOO_LARGE
    );
    assert_eq!(
        SiteError::from(ApiError::from_status(503, "/api/gallery")).status_code(),
        StatusCode::BAD_GATEWAY
    );
}

#[test]
fn test_codes_are_distinct() {
    let errors = [
        SiteError::config(""),
        SiteError::Api(ApiError::network("", "/")),
        SiteError::validation(""),
        SiteError::not_found(""),
        SiteError::file_operation(""),
        SiteError::serialization(""),
        SiteError::invalid_multipart(""),
        SiteError::payload_too_large(""),
    ];
    let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn test_io_not_found_maps_to_not_found() {
    let err: SiteError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(err, SiteError::NotFound(_)));

    let err: SiteError = std::io::Error::other("disk").into();
    assert!(matches!(err, SiteError::FileOperation(_)));
}

#[test]
fn test_display_uses_simple_format() {
    let err = SiteError::validation("email missing");
    assert_eq!(err.to_string(), "Validation Error: email missing");
}

#[actix_rt::test]
async fn test_error_response_is_html_page() {
    let resp = SiteError::payload_too_large("Attachment exceeds 20 MB").error_response();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );
    let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Attachment exceeds 20 MB"));
}
