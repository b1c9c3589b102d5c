//! Page flow tests
//!
//! Creation and resolution flows against a counting in-memory service.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use shortfront::client::{ResolveResponse, ShortUrlRecord, ShortenerService};
use shortfront::errors::{Result, ShortfrontError};
use shortfront::pages::{
    CreatePage, Navigation, RecordingNavigator, RedirectPage, ResolveState,
};
use shortfront::utils::is_valid_url;

/// Holds every creation request until `release` is notified
struct GatedService {
    creates: AtomicUsize,
    resolves: AtomicUsize,
    release: Notify,
    reject: bool,
}

impl GatedService {
    fn new(reject: bool) -> Arc<Self> {
        Arc::new(Self {
            creates: AtomicUsize::new(0),
            resolves: AtomicUsize::new(0),
            release: Notify::new(),
            reject,
        })
    }
}

#[async_trait]
impl ShortenerService for GatedService {
    async fn create_short_url(&self, long_url: &str) -> Result<ShortUrlRecord> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        if self.reject {
            return Err(ShortfrontError::service_rejected(500, "rate limited"));
        }
        assert_eq!(long_url, "https://example.com/very/long/path");
        Ok(ShortUrlRecord {
            url: "https://s.co/abc".to_string(),
            message: String::new(),
            code: "abc".to_string(),
        })
    }

    async fn resolve(&self, code: &str) -> Result<ResolveResponse> {
        self.resolves.fetch_add(1, Ordering::SeqCst);
        Ok(match code {
            "abc" => ResolveResponse::destination("https://example.com"),
            _ => ResolveResponse::not_found(),
        })
    }
}

#[test]
fn test_url_validity_examples() {
    assert!(is_valid_url("https://example.com"));
    assert!(!is_valid_url("ftp://example.com"));
    assert!(!is_valid_url("not a url"));
    assert!(!is_valid_url(""));
}

#[tokio::test]
async fn test_empty_and_javascript_input_never_reach_service() {
    let service = GatedService::new(false);

    let mut page = CreatePage::new();
    page.submit(service.as_ref()).await;
    assert!(matches!(page.error(), Some(ShortfrontError::MissingInput(_))));

    page.set_input("javascript:alert(1)");
    page.submit(service.as_ref()).await;
    assert!(matches!(page.error(), Some(ShortfrontError::InvalidUrl(_))));

    assert_eq!(service.creates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_in_flight_flag_spans_the_request() {
    let service = GatedService::new(false);
    let mut page = CreatePage::new();
    page.set_input("https://example.com/very/long/path");

    let pending = page.begin_submit().expect("valid input");
    assert!(page.is_in_flight());

    let worker = {
        let service = service.clone();
        tokio::spawn(async move { pending.send(service.as_ref()).await })
    };

    // still outstanding: a second submit is ignored
    tokio::task::yield_now().await;
    assert!(page.begin_submit().is_none());
    assert!(page.is_in_flight());

    service.release.notify_one();
    let outcome = worker.await.unwrap();
    page.finish_submit(outcome);

    assert!(!page.is_in_flight());
    assert_eq!(page.short_url(), Some("https://s.co/abc"));
    assert!(page.error().is_none());
    assert_eq!(service.creates.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_rejection_leaves_result_unset() {
    let service = GatedService::new(true);
    service.release.notify_one();

    let mut page = CreatePage::new();
    page.set_input("https://example.com/very/long/path");
    page.submit(service.as_ref()).await;

    assert!(!page.is_in_flight());
    assert!(page.short_url().is_none());
    assert_eq!(
        page.error(),
        Some(&ShortfrontError::ServiceRejected {
            status: 500,
            message: "rate limited".to_string()
        })
    );
}

#[tokio::test]
async fn test_resolution_navigates_once_per_code() {
    let service = GatedService::new(false);
    let mut page = RedirectPage::new();
    let mut navigator = RecordingNavigator::default();

    let nav = page.resolve("abc", service.as_ref(), &mut navigator).await;
    assert_eq!(nav, Some(Navigation::Destination("https://example.com".into())));
    assert_eq!(navigator.target.as_deref(), Some("https://example.com"));

    // same code again: no second request
    assert!(page.resolve("abc", service.as_ref(), &mut navigator).await.is_none());
    assert_eq!(service.resolves.load(Ordering::SeqCst), 1);

    let nav = page.resolve("zzz", service.as_ref(), &mut navigator).await;
    assert_eq!(nav, Some(Navigation::Root));
    assert_eq!(navigator.target.as_deref(), Some("/"));
    assert_eq!(
        page.state(),
        &ResolveState::Done {
            code: "zzz".into(),
            navigation: Navigation::Root
        }
    );
    assert_eq!(service.resolves.load(Ordering::SeqCst), 2);
}
