//! Creation page state
//!
//! Holds the candidate long URL, the last short URL, the current error and
//! the in-flight flag for one page instance. A submission is split in three
//! steps so that a UI can keep rendering while the request is outstanding:
//!
//! 1. [`CreatePage::begin_submit`] validates locally and raises the in-flight flag
//! 2. [`PendingCreate::send`] performs the single network call
//! 3. [`CreatePage::finish_submit`] lowers the flag and records the outcome
//!
//! [`CreatePage::submit`] chains the three for callers that can simply await.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::notification::{Notification, Notifications};
use crate::client::{ShortUrlRecord, ShortenerService};
use crate::errors::{Result, ShortfrontError};
use crate::utils::url_validator::{validate_url, validation_error_message};

/// Title of the notification shown when the service call fails
pub const CREATE_FAILED_TITLE: &str = "Error to generate short url";

/// Inline message for an empty submission
pub const MISSING_INPUT_MESSAGE: &str = "Please enter a URL to shorten";

#[derive(Debug, Default)]
pub struct CreatePage {
    input: String,
    short_url: Option<String>,
    error: Option<ShortfrontError>,
    in_flight: bool,
    notifications: Notifications,
}

/// A validated submission waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCreate {
    long_url: String,
}

impl PendingCreate {
    pub fn long_url(&self) -> &str {
        &self.long_url
    }

    /// Issue the creation request. Exactly one call to the service.
    pub async fn send(self, service: &dyn ShortenerService) -> Result<ShortUrlRecord> {
        debug!("Submitting {} to {}", self.long_url, service.name());
        service.create_short_url(&self.long_url).await
    }
}

impl CreatePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notification_ttl(ttl: Duration) -> Self {
        Self {
            notifications: Notifications::new(ttl),
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input. Editing clears a pending inline error.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.clear_inline_error();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.clear_inline_error();
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        self.clear_inline_error();
    }

    pub fn short_url(&self) -> Option<&str> {
        self.short_url.as_deref()
    }

    pub fn error(&self) -> Option<&ShortfrontError> {
        self.error.as_ref()
    }

    /// Error to render next to the input, if any
    pub fn inline_error(&self) -> Option<&ShortfrontError> {
        self.error.as_ref().filter(|e| e.is_inline())
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Submit controls must be disabled when this is false
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Validate the input and, if it passes, raise the in-flight flag.
    ///
    /// Returns `None` without touching the network when a request is already
    /// outstanding or when validation fails; in the latter case the page
    /// carries `MissingInput` or `InvalidUrl`.
    pub fn begin_submit(&mut self) -> Option<PendingCreate> {
        if self.in_flight {
            debug!("Submit ignored: a creation request is already in flight");
            return None;
        }

        let candidate = self.input.trim();

        if candidate.is_empty() {
            self.error = Some(ShortfrontError::missing_input(MISSING_INPUT_MESSAGE));
            return None;
        }

        if let Err(e) = validate_url(candidate) {
            debug!("Rejected {:?}: {}", candidate, e);
            self.error = Some(ShortfrontError::invalid_url(validation_error_message(&e)));
            return None;
        }

        let pending = PendingCreate {
            long_url: candidate.to_string(),
        };
        self.error = None;
        self.in_flight = true;
        Some(pending)
    }

    /// Record the outcome of a request started by `begin_submit`.
    ///
    /// The input is cleared whatever the outcome. A failure leaves the
    /// previously displayed short URL in place.
    pub fn finish_submit(&mut self, outcome: Result<ShortUrlRecord>) {
        if !self.in_flight {
            warn!("Creation outcome arrived with no request in flight; ignored");
            return;
        }

        self.in_flight = false;
        self.input.clear();

        match outcome {
            Ok(record) => {
                info!("Short url created: {}", record.url);
                self.short_url = Some(record.url);
                self.error = None;
            }
            Err(err) => {
                warn!("Short url creation failed: {}", err);
                self.notifications
                    .push(Notification::error(CREATE_FAILED_TITLE, err.message()));
                self.error = Some(err);
            }
        }
    }

    /// Validate, send and record in one go
    pub async fn submit(&mut self, service: &dyn ShortenerService) {
        if let Some(pending) = self.begin_submit() {
            let outcome = pending.send(service).await;
            self.finish_submit(outcome);
        }
    }

    fn clear_inline_error(&mut self) {
        if self.error.as_ref().is_some_and(|e| e.is_inline()) {
            self.error = None;
        }
    }
}
