//! App state for the terminal creation page

mod create_operations;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::oneshot;

use crate::client::{ShortUrlRecord, ShortenerService};
use crate::errors::Result;
use crate::pages::{ClipboardWriter, CreatePage};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Help,
    Exiting,
}

pub struct App {
    pub current_screen: CurrentScreen,
    pub page: CreatePage,
    service: Arc<dyn ShortenerService>,
    /// Outcome of the request started by the last submit
    pending: Option<oneshot::Receiver<Result<ShortUrlRecord>>>,
    clipboard: Box<dyn ClipboardWriter>,
}

impl App {
    pub fn new(service: Arc<dyn ShortenerService>, notification_ttl: Duration) -> Self {
        Self::with_clipboard(
            service,
            notification_ttl,
            Box::new(crate::pages::clipboard::SystemClipboard::default()),
        )
    }

    pub fn with_clipboard(
        service: Arc<dyn ShortenerService>,
        notification_ttl: Duration,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        Self {
            current_screen: CurrentScreen::Main,
            page: CreatePage::with_notification_ttl(notification_ttl),
            service,
            pending: None,
            clipboard,
        }
    }

    pub fn service_name(&self) -> &str {
        self.service.name()
    }

    /// Drop expired notifications
    pub fn tick(&mut self, now: Instant) {
        self.page.notifications_mut().prune(now);
    }
}
