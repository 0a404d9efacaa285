//! Request ID middleware
//!
//! One ID per request: a valid inbound `X-Request-ID` from the proxy is kept,
//! otherwise a UUID is generated.
//! The ID is stored in the request extensions, recorded on a tracing span
//! covering the whole request and echoed in the response.

use actix_web::{
    Error, HttpMessage,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
    middleware::Next,
};
use tracing::{Instrument, info_span};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_INBOUND_LEN: usize = 64;

/// Request ID, extractable with `web::ReqData<RequestId>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Accept an upstream ID when it is short and made of `[A-Za-z0-9_-]`
    pub fn from_header(value: &str) -> Option<Self> {
        let acceptable = (1..=MAX_INBOUND_LEN).contains(&value.len())
            && value
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_'));
        acceptable.then(|| Self(value.to_owned()))
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub struct RequestIdMiddleware;

impl RequestIdMiddleware {
    /// Use with `actix_web::middleware::from_fn`
    pub async fn assign(
        req: ServiceRequest,
        next: Next<impl MessageBody>,
    ) -> Result<ServiceResponse<impl MessageBody>, Error> {
        let id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(RequestId::from_header)
            .unwrap_or_else(RequestId::generate);

        let span = info_span!(
            "request",
            request_id = %id.as_str(),
            method = %req.method(),
            path = %req.path(),
        );
        req.extensions_mut().insert(id.clone());

        let mut resp = next.call(req).instrument(span).await?;
        if let Ok(value) = HeaderValue::from_str(id.as_str()) {
            resp.headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::middleware::from_fn;
    use actix_web::test::{TestRequest, call_service, init_service, read_body};
    use actix_web::{App, HttpResponse, web};

    fn header(resp: &ServiceResponse<impl MessageBody>) -> String {
        resp.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_from_header_rules() {
        assert!(RequestId::from_header("edge-1234_ab").is_some());
        assert!(RequestId::from_header("").is_none());
        assert!(RequestId::from_header("bad id<script>").is_none());
        assert!(RequestId::from_header(&"a".repeat(65)).is_none());
    }

    #[actix_rt::test]
    async fn test_generates_id_when_missing() {
        let app = init_service(
            App::new()
                .wrap(from_fn(RequestIdMiddleware::assign))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let resp = call_service(&app, TestRequest::get().uri("/").to_request()).await;
        assert!(Uuid::parse_str(&header(&resp)).is_ok());
    }

    #[actix_rt::test]
    async fn test_inbound_id_reaches_handler_and_response() {
        let app = init_service(
            App::new()
                .wrap(from_fn(RequestIdMiddleware::assign))
                .route(
                    "/",
                    web::get().to(|id: web::ReqData<RequestId>| async move {
                        HttpResponse::Ok().body(id.as_str().to_string())
                    }),
                ),
        )
        .await;

        let req = TestRequest::get()
            .uri("/")
            .insert_header((REQUEST_ID_HEADER, "edge-1234_ab"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(header(&resp), "edge-1234_ab");
        assert_eq!(read_body(resp).await.as_ref(), b"edge-1234_ab");

        let req = TestRequest::get()
            .uri("/")
            .insert_header((REQUEST_ID_HEADER, "bad id<script>"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_ne!(header(&resp), "bad id<script>");
    }
}
