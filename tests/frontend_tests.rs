//! Browser front tests
//!
//! Drives the actix routes with a mocked shortening service.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_TYPE, LOCATION};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use async_trait::async_trait;

use shortfront::api::middleware::AccessLog;
use shortfront::api::services::{frontend_routes, redirect_routes};
use shortfront::client::{ResolveResponse, ShortUrlRecord, ShortenerService};
use shortfront::errors::{Result, ShortfrontError};
use shortfront::pages::create::{CREATE_FAILED_TITLE, MISSING_INPUT_MESSAGE};

#[derive(Default)]
struct MockService {
    creates: AtomicUsize,
    resolves: AtomicUsize,
}

#[async_trait]
impl ShortenerService for MockService {
    async fn create_short_url(&self, long_url: &str) -> Result<ShortUrlRecord> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if long_url.contains("rate-limit") {
            return Err(ShortfrontError::service_rejected(500, "rate limited"));
        }
        Ok(ShortUrlRecord {
            url: "https://s.co/abc".to_string(),
            message: String::new(),
            code: "abc".to_string(),
        })
    }

    async fn resolve(&self, code: &str) -> Result<ResolveResponse> {
        self.resolves.fetch_add(1, Ordering::SeqCst);
        match code {
            "abc" => Ok(ResolveResponse::destination("https://example.com")),
            "down" => Err(ShortfrontError::resolution_failure("connection refused")),
            "evil" => Ok(ResolveResponse::destination("javascript:alert(1)")),
            "nl" => Ok(ResolveResponse::destination("https://exa\nmple.com/")),
            "idn" => Ok(ResolveResponse::destination("https://例子.测试/")),
            _ => Ok(ResolveResponse::not_found()),
        }
    }
}

macro_rules! init_app {
    ($mock:expr) => {{
        let service: Arc<dyn ShortenerService> = $mock.clone();
        test::init_service(
            App::new()
                .wrap(AccessLog)
                .app_data(web::Data::new(service))
                .configure(frontend_routes)
                .configure(redirect_routes),
        )
        .await
    }};
}

async fn body_string<B: actix_web::body::MessageBody>(resp: actix_web::dev::ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// Creation page
// =============================================================================

#[actix_web::test]
async fn test_index_renders_empty_page() {
    let mock = Arc::new(MockService::default());
    let app = init_app!(mock);

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()
            .get(CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let body = body_string(resp).await;
    assert!(body.contains("Make your URL shorter!"));
    assert!(body.contains("Go shorter!"));
    assert!(!body.contains("id=\"short-url\""));
    assert_eq!(mock.creates.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_submit_shows_short_url() {
    let mock = Arc::new(MockService::default());
    let app = init_app!(mock);

    let req = TestRequest::post()
        .uri("/")
        .set_form([("url", "https://example.com/very/long/path")])
        .to_request();
    let body = body_string(test::call_service(&app, req).await).await;

    assert!(body.contains("https://s.co/abc"));
    assert!(!body.contains("inline-error"));
    assert_eq!(mock.creates.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn test_submit_empty_is_rejected_locally() {
    let mock = Arc::new(MockService::default());
    let app = init_app!(mock);

    let req = TestRequest::post()
        .uri("/")
        .set_form([("url", "   ")])
        .to_request();
    let body = body_string(test::call_service(&app, req).await).await;

    assert!(body.contains(MISSING_INPUT_MESSAGE));
    assert_eq!(mock.creates.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_submit_missing_field_is_rejected_locally() {
    let mock = Arc::new(MockService::default());
    let app = init_app!(mock);

    let req = TestRequest::post()
        .uri("/")
        .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload("")
        .to_request();
    let body = body_string(test::call_service(&app, req).await).await;

    assert!(body.contains(MISSING_INPUT_MESSAGE));
    assert_eq!(mock.creates.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_submit_javascript_url_is_rejected_locally() {
    let mock = Arc::new(MockService::default());
    let app = init_app!(mock);

    let req = TestRequest::post()
        .uri("/")
        .set_form([("url", "javascript:alert(1)")])
        .to_request();
    let body = body_string(test::call_service(&app, req).await).await;

    assert!(body.contains("inline-error"));
    // the rejected input is kept, escaped, for correction
    assert!(body.contains("javascript:alert(1)"));
    assert_eq!(mock.creates.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_submit_service_rejection_shows_notification() {
    let mock = Arc::new(MockService::default());
    let app = init_app!(mock);

    let req = TestRequest::post()
        .uri("/")
        .set_form([("url", "https://example.com/rate-limit")])
        .to_request();
    let body = body_string(test::call_service(&app, req).await).await;

    assert!(body.contains(CREATE_FAILED_TITLE));
    assert!(body.contains("rate limited"));
    assert!(!body.contains("id=\"short-url\""));
    assert_eq!(mock.creates.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn test_favicon_is_not_a_redirect_code() {
    let mock = Arc::new(MockService::default());
    let app = init_app!(mock);

    let resp = test::call_service(&app, TestRequest::get().uri("/favicon.ico").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "image/x-icon");
    assert_eq!(mock.resolves.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Redirect handler
// =============================================================================

async fn redirect_location(code: &str, mock: &Arc<MockService>) -> String {
    let app = init_app!(mock);
    let resp = test::call_service(
        &app,
        TestRequest::get().uri(&format!("/{}", code)).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    resp.headers()
        .get(LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

#[actix_web::test]
async fn test_redirect_to_destination() {
    let mock = Arc::new(MockService::default());
    assert_eq!(redirect_location("abc", &mock).await, "https://example.com");
    assert_eq!(mock.resolves.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn test_redirect_unknown_code_goes_home() {
    let mock = Arc::new(MockService::default());
    assert_eq!(redirect_location("zzz", &mock).await, "/");
}

#[actix_web::test]
async fn test_redirect_failures_go_home() {
    let mock = Arc::new(MockService::default());
    assert_eq!(redirect_location("down", &mock).await, "/");
    assert_eq!(redirect_location("evil", &mock).await, "/");
}

#[actix_web::test]
async fn test_redirect_destination_with_newline_is_normalized() {
    let mock = Arc::new(MockService::default());
    assert_eq!(
        redirect_location("nl", &mock).await,
        "https://example.com/"
    );
}

#[actix_web::test]
async fn test_redirect_non_ascii_destination_is_punycoded() {
    let mock = Arc::new(MockService::default());
    let location = redirect_location("idn", &mock).await;
    assert!(location.starts_with("https://xn--"), "got {}", location);
}

#[actix_web::test]
async fn test_head_redirect_matches_get() {
    let mock = Arc::new(MockService::default());
    let app = init_app!(mock);
    let resp = test::call_service(
        &app,
        TestRequest::default()
            .method(actix_web::http::Method::HEAD)
            .uri("/abc")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "https://example.com");
    assert_eq!(mock.resolves.load(Ordering::SeqCst), 1);
}
