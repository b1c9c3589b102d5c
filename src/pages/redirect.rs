//! Redirect page state
//!
//! Resolves a redirect code once per code value:
//!
//! ```text
//! Idle ──on_code(c)──> Resolving{c} ──finish(c, ..)──> Done{c, navigation}
//!   ^                       │                              │
//!   └── on_code(c') with c' != current code re-enters Resolving ┘
//! ```
//!
//! Any failure to obtain a usable destination collapses to the root path.

use tracing::{debug, info, trace, warn};

use crate::client::{ResolveResponse, ShortenerService};
use crate::errors::{Result, ShortfrontError};
use crate::utils::is_valid_url;

/// Where the creation page lives
pub const ROOT_PATH: &str = "/";

/// Outcome of a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Destination(String),
    Root,
}

impl Navigation {
    pub fn target(&self) -> &str {
        match self {
            Navigation::Destination(url) => url,
            Navigation::Root => ROOT_PATH,
        }
    }
}

/// Something that can send the user somewhere else
pub trait Navigator {
    fn navigate(&mut self, target: &str);
}

/// Keeps the last navigation target instead of acting on it
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub target: Option<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, target: &str) {
        self.target = Some(target.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResolveState {
    #[default]
    Idle,
    Resolving {
        code: String,
    },
    Done {
        code: String,
        navigation: Navigation,
    },
}

/// A resolution request waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingResolve {
    code: String,
}

impl PendingResolve {
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Issue the resolution request. An empty code never reaches the network.
    pub async fn send(&self, service: &dyn ShortenerService) -> Result<ResolveResponse> {
        if self.code.trim().is_empty() {
            return Err(ShortfrontError::resolution_failure("Empty redirect code"));
        }
        service.resolve(&self.code).await
    }
}

/// Map a service outcome to a navigation
pub fn navigation_for(outcome: Result<ResolveResponse>) -> Navigation {
    match outcome {
        Err(e) => {
            warn!("Resolution failed, falling back to {}: {}", ROOT_PATH, e);
            Navigation::Root
        }
        Ok(resp) if resp.is_error() => {
            debug!("Service reported an error for this code: {:?}", resp.error);
            Navigation::Root
        }
        Ok(ResolveResponse { url: Some(url), .. }) if is_valid_url(&url) => {
            Navigation::Destination(url)
        }
        Ok(resp) => {
            warn!("Unusable destination in resolve response: {:?}", resp.url);
            Navigation::Root
        }
    }
}

#[derive(Debug, Default)]
pub struct RedirectPage {
    state: ResolveState,
}

impl RedirectPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ResolveState {
        &self.state
    }

    /// The code currently being resolved or already resolved
    pub fn code(&self) -> Option<&str> {
        match &self.state {
            ResolveState::Idle => None,
            ResolveState::Resolving { code } | ResolveState::Done { code, .. } => Some(code),
        }
    }

    pub fn navigation(&self) -> Option<&Navigation> {
        match &self.state {
            ResolveState::Done { navigation, .. } => Some(navigation),
            _ => None,
        }
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self.state, ResolveState::Resolving { .. })
    }

    /// Called whenever the page sees a code. Only a code different from the
    /// current one starts a request.
    pub fn on_code(&mut self, code: &str) -> Option<PendingResolve> {
        if self.code() == Some(code) {
            trace!("Code {:?} already handled, no new request", code);
            return None;
        }

        self.state = ResolveState::Resolving {
            code: code.to_string(),
        };
        Some(PendingResolve {
            code: code.to_string(),
        })
    }

    /// Record the outcome for `code`. Outcomes for a code that is no longer
    /// current are dropped and return `None`.
    pub fn finish(&mut self, code: &str, outcome: Result<ResolveResponse>) -> Option<Navigation> {
        match &self.state {
            ResolveState::Resolving { code: current } if current == code => {}
            _ => {
                debug!("Dropping stale resolution for {:?}", code);
                return None;
            }
        }

        let navigation = navigation_for(outcome);
        info!("Redirect {:?} -> {}", code, navigation.target());
        self.state = ResolveState::Done {
            code: code.to_string(),
            navigation: navigation.clone(),
        };
        Some(navigation)
    }

    /// Resolve `code` and navigate. Does nothing when `code` was already handled.
    pub async fn resolve(
        &mut self,
        code: &str,
        service: &dyn ShortenerService,
        navigator: &mut dyn Navigator,
    ) -> Option<Navigation> {
        let pending = self.on_code(code)?;
        let outcome = pending.send(service).await;
        let navigation = self.finish(pending.code(), outcome)?;
        navigator.navigate(navigation.target());
        Some(navigation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_for_destination() {
        let nav = navigation_for(Ok(ResolveResponse::destination("https://example.com")));
        assert_eq!(nav, Navigation::Destination("https://example.com".into()));
        assert_eq!(nav.target(), "https://example.com");
    }

    #[test]
    fn test_navigation_for_error_flag() {
        assert_eq!(
            navigation_for(Ok(ResolveResponse::not_found())),
            Navigation::Root
        );
    }

    #[test]
    fn test_navigation_for_failures_collapse_to_root() {
        assert_eq!(
            navigation_for(Err(ShortfrontError::resolution_failure("timeout"))),
            Navigation::Root
        );
        assert_eq!(
            navigation_for(Ok(ResolveResponse::default())),
            Navigation::Root
        );
        assert_eq!(
            navigation_for(Ok(ResolveResponse::destination("javascript:alert(1)"))),
            Navigation::Root
        );
    }

    #[test]
    fn test_same_code_does_not_restart() {
        let mut page = RedirectPage::new();
        assert!(page.on_code("abc").is_some());
        assert!(page.is_resolving());
        assert!(page.on_code("abc").is_none());

        page.finish("abc", Ok(ResolveResponse::destination("https://example.com")));
        assert!(page.on_code("abc").is_none());
        assert_eq!(
            page.navigation(),
            Some(&Navigation::Destination("https://example.com".into()))
        );
    }

    #[test]
    fn test_new_code_restarts_and_stale_outcome_is_dropped() {
        let mut page = RedirectPage::new();
        page.on_code("abc");
        assert!(page.on_code("def").is_some());

        let stale = page.finish("abc", Ok(ResolveResponse::destination("https://a.example")));
        assert!(stale.is_none());
        assert_eq!(page.code(), Some("def"));
        assert!(page.is_resolving());

        let nav = page.finish("def", Ok(ResolveResponse::not_found()));
        assert_eq!(nav, Some(Navigation::Root));
    }

    #[test]
    fn test_recording_navigator() {
        let mut nav = RecordingNavigator::default();
        nav.navigate("/");
        assert_eq!(nav.target.as_deref(), Some("/"));
    }
}
