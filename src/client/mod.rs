//! Client layer for the remote shortening service
//!
//! Pages talk to the service only through [`ShortenerService`], so the
//! browser front, the terminal page and the tests can swap transports.
//!
//! ```text
//! CreatePage / RedirectPage → ShortenerService ──→ HttpShortenerService (ureq)
//!                                               └→ test doubles
//! ```
//!
//! # Error mapping
//!
//! - non-2xx on creation → `ShortfrontError::ServiceRejected`
//! - network, timeout or malformed body on creation → `ShortfrontError::TransportFailure`
//! - any failure on resolution → `ShortfrontError::ResolutionFailure`

mod http;
mod models;

pub use http::HttpShortenerService;
pub use models::{
    CreateShortUrlRequest, DEFAULT_CREATED_BY, ResolveResponse, ServiceMessage, ShortUrlRecord,
};

use async_trait::async_trait;

use crate::errors::Result;

#[async_trait]
pub trait ShortenerService: Send + Sync {
    /// Ask the service to mint (or return) a short URL for `long_url`.
    ///
    /// Exactly one request per call; no retry.
    async fn create_short_url(&self, long_url: &str) -> Result<ShortUrlRecord>;

    /// Look up the destination for a redirect code.
    async fn resolve(&self, code: &str) -> Result<ResolveResponse>;

    fn name(&self) -> &str {
        "unknown"
    }
}
