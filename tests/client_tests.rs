//! Content API client tests against a mock server

use bytes::Bytes;
use httpmock::prelude::*;

use emasmetal::client::{ContentApi, HttpContentApi};
use emasmetal::config::ApiConfig;
use emasmetal::models::{Attachment, ContactSubmission};

fn client(server: &MockServer) -> HttpContentApi {
    HttpContentApi::from_config(&ApiConfig {
        base_url: format!("{}/", server.base_url()),
        timeout_secs: 2,
        ..ApiConfig::default()
    })
    .expect("client")
}

#[tokio::test]
async fn test_list_references_decodes_camel_case() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/references");
        then.status(200).json_body(serde_json::json!([
            {
                "id": "1",
                "name": "Siemens Energy",
                "industry": "Energy & Power",
                "logoUrl": "/uploads/siemens.png",
                "websiteUrl": "https://siemens-energy.com",
                "displayOrder": 1,
                "createdAt": "2024-05-01T10:00:00Z"
            }
        ]));
    });

    let refs = client(&server).list_references(None).await.unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].logo_url.as_deref(), Some("/uploads/siemens.png"));
    assert_eq!(refs[0].display_order, Some(1));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_dropped() {
    let server = MockServer::start();
    let api = client(&server);
    assert_eq!(api.base_url(), server.base_url());
}

#[tokio::test]
async fn test_api_error_body_is_passed_through() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/gallery");
        then.status(500).json_body(serde_json::json!({
            "timestamp": "2025-01-01T00:00:00Z",
            "status": 500,
            "error": "Internal Server Error",
            "message": "storage offline",
            "path": "/api/gallery"
        }));
    });

    let err = client(&server).list_gallery(None).await.unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(err.message, "storage offline");
    assert!(!err.is_synthesized());
}

#[tokio::test]
async fn test_non_json_error_is_synthesized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/references");
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let err = client(&server).list_references(None).await.unwrap_err();
    assert_eq!(err.status, 502);
    assert_eq!(err.error, "Bad Gateway");
    assert_eq!(err.message, "Request failed with status code 502");
    assert_eq!(err.path, "/api/references");
    assert!(err.is_synthesized());
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    let api = HttpContentApi::from_config(&ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..ApiConfig::default()
    })
    .unwrap();

    let err = api.list_references(None).await.unwrap_err();
    assert_eq!(err.error, "Network Error");
    assert_eq!(err.status, 500);
    assert!(err.is_synthesized());
}

#[tokio::test]
async fn test_gallery_item_404_is_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/gallery/9");
        then.status(404);
    });

    assert!(client(&server).get_gallery_item("9").await.unwrap().is_none());
}

#[tokio::test]
async fn test_contact_is_sent_as_multipart_with_attachment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/contact")
            .header_exists("content-type")
            .body_contains("name=\"data\"")
            .body_contains("\"message\":\"Quote for 12 shafts\"")
            .body_contains("filename=\"shaft.dxf\"");
        then.status(200)
            .json_body(serde_json::json!({ "message": "Received", "success": true }));
    });

    let submission = ContactSubmission {
        name: "Ada".into(),
        company: None,
        email: "ada@example.com".into(),
        phone: None,
        message: "Quote for 12 shafts".into(),
    };
    let attachment = Attachment {
        filename: "shaft.dxf".into(),
        content_type: "application/dxf".into(),
        data: Bytes::from_static(b"0\nSECTION\n"),
    };

    let reply = client(&server)
        .submit_contact(&submission, Some(attachment))
        .await
        .unwrap();
    mock.assert();
    assert_eq!(reply.message, "Received");
    assert_eq!(reply.success, Some(true));
}
