//! Creation and copy operations

use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::debug;

use super::App;
use crate::errors::ShortfrontError;
use crate::pages::copy_short_url;

impl App {
    /// Validate the input and start the request in the background.
    ///
    /// Does nothing while a request is in flight.
    pub fn submit(&mut self) {
        let Some(pending) = self.page.begin_submit() else {
            return;
        };

        let (tx, rx) = oneshot::channel();
        let service = self.service.clone();
        tokio::spawn(async move {
            let outcome = pending.send(service.as_ref()).await;
            // the receiver is gone only when the app already quit
            let _ = tx.send(outcome);
        });
        self.pending = Some(rx);
    }

    /// Record the outcome of the background request once it is available
    pub fn poll_pending(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.page.finish_submit(outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                debug!("Creation task ended without sending an outcome");
                self.pending = None;
                self.page.finish_submit(Err(ShortfrontError::transport_failure(
                    "The request was interrupted",
                )));
            }
        }
    }

    pub fn copy_result(&mut self) -> bool {
        copy_short_url(&mut self.page, self.clipboard.as_mut())
    }

    pub fn clear_input(&mut self) {
        self.page.set_input("");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::client::{ResolveResponse, ShortUrlRecord, ShortenerService};
    use crate::errors::Result;
    use crate::pages::{ClipboardWriter, NotificationLevel};

    struct SlowService {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ShortenerService for SlowService {
        async fn create_short_url(&self, _long_url: &str) -> Result<ShortUrlRecord> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(ShortUrlRecord {
                url: "https://s.co/abc".into(),
                message: String::new(),
                code: "abc".into(),
            })
        }

        async fn resolve(&self, _code: &str) -> Result<ResolveResponse> {
            Ok(ResolveResponse::not_found())
        }
    }

    struct NoClipboard;

    impl ClipboardWriter for NoClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(ShortfrontError::clipboard("no display"))
        }
    }

    fn app(service: Arc<SlowService>) -> App {
        App::with_clipboard(service, Duration::from_secs(5), Box::new(NoClipboard))
    }

    async fn wait_until_idle(app: &mut App) {
        for _ in 0..100 {
            app.poll_pending();
            if !app.page.is_in_flight() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("request never completed");
    }

    #[tokio::test]
    async fn test_submit_runs_in_background() {
        let service = Arc::new(SlowService {
            calls: AtomicUsize::new(0),
        });
        let mut app = app(service.clone());
        app.page.set_input("https://example.com/very/long/path");

        app.submit();
        assert!(app.page.is_in_flight());

        // resubmitting while in flight is ignored
        app.submit();

        wait_until_idle(&mut app).await;
        assert_eq!(app.page.short_url(), Some("https://s.co/abc"));
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_copy_failure_is_a_warning() {
        let service = Arc::new(SlowService {
            calls: AtomicUsize::new(0),
        });
        let mut app = app(service);
        app.page.set_input("https://example.com");
        app.submit();
        wait_until_idle(&mut app).await;

        assert!(!app.copy_result());
        assert_eq!(
            app.page.notifications().latest().unwrap().level,
            NotificationLevel::Warning
        );
    }

    #[tokio::test]
    async fn test_invalid_input_never_spawns() {
        let service = Arc::new(SlowService {
            calls: AtomicUsize::new(0),
        });
        let mut app = app(service.clone());
        app.page.set_input("javascript:alert(1)");
        app.submit();
        assert!(!app.page.is_in_flight());
        assert!(app.page.inline_error().is_some());
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }
}
