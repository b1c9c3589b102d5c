use std::sync::Arc;

use actix_web::http::header::{CACHE_CONTROL, HeaderValue, LOCATION};
use actix_web::{HttpResponse, Responder, web};
use tracing::{trace, warn};
use url::Url;

use crate::client::ShortenerService;
use crate::pages::{ROOT_PATH, RecordingNavigator, RedirectPage};

pub struct RedirectService {}

impl RedirectService {
    /// Resolve the code and answer with a temporary redirect.
    ///
    /// Every failure lands on the creation page, so this always answers 307.
    /// HEAD goes through the same resolution so link checkers see the real
    /// `Location`.
    pub async fn handle_redirect(
        path: web::Path<String>,
        service: web::Data<Arc<dyn ShortenerService>>,
    ) -> impl Responder {
        let code = path.into_inner();
        trace!("Redirect request for code: {}", code);

        let mut page = RedirectPage::new();
        let mut navigator = RecordingNavigator::default();
        page.resolve(&code, service.get_ref().as_ref(), &mut navigator)
            .await;

        let location = navigator.target.unwrap_or_else(|| ROOT_PATH.to_string());
        Self::temporary_redirect(location_header(&location))
    }

    #[inline]
    fn temporary_redirect(location: HeaderValue) -> HttpResponse {
        HttpResponse::TemporaryRedirect()
            .insert_header((LOCATION, location))
            .insert_header((CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Header value for a redirect target
///
/// Plain visible ASCII is sent as is. Anything else (control characters,
/// non-ASCII hosts or paths) is replaced by its WHATWG serialization, which is
/// always ASCII. Targets that still cannot be carried fall back to the root.
pub fn location_header(target: &str) -> HeaderValue {
    if target.bytes().all(|b| b.is_ascii_graphic()) {
        if let Ok(value) = HeaderValue::from_str(target) {
            return value;
        }
    }

    match Url::parse(target)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
    {
        Some(value) => value,
        None => {
            warn!("Redirect target {:?} is not header-safe, using {}", target, ROOT_PATH);
            HeaderValue::from_static(ROOT_PATH)
        }
    }
}

pub fn redirect_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{code}", web::get().to(RedirectService::handle_redirect))
        .route("/{code}", web::head().to(RedirectService::handle_redirect));
}
