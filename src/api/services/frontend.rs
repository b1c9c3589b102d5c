//! Creation page served to browsers
//!
//! `GET /` renders an empty page, `POST /` runs one creation flow and
//! renders its outcome. Each request gets its own `CreatePage`.

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result, web};
use askama::Template;
use serde::Deserialize;
use tracing::{error, trace};

use crate::client::ShortenerService;
use crate::config::get_config;
use crate::pages::{CreatePage, Notification};

/// Body of the creation form
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

pub struct NotificationView {
    pub level: &'static str,
    pub title: String,
    pub description: String,
}

impl From<&Notification> for NotificationView {
    fn from(n: &Notification) -> Self {
        Self {
            level: n.level.as_str(),
            title: n.title.clone(),
            description: n.description.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct CreatePageTemplate {
    pub input: String,
    pub inline_error: String,
    pub short_url: String,
    pub notifications: Vec<NotificationView>,
    pub notification_ttl_ms: u64,
    pub version: &'static str,
}

impl From<&CreatePage> for CreatePageTemplate {
    fn from(page: &CreatePage) -> Self {
        Self {
            input: page.input().to_string(),
            inline_error: page
                .inline_error()
                .map(|e| e.message().to_string())
                .unwrap_or_default(),
            short_url: page.short_url().unwrap_or_default().to_string(),
            notifications: page.notifications().iter().map(Into::into).collect(),
            notification_ttl_ms: page.notifications().ttl().as_millis() as u64,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

pub struct FrontendService;

impl FrontendService {
    pub async fn handle_index(_req: HttpRequest) -> Result<HttpResponse> {
        trace!("Serving creation page");
        Ok(Self::render(&Self::new_page()))
    }

    pub async fn handle_submit(
        form: web::Form<ShortenForm>,
        service: web::Data<Arc<dyn ShortenerService>>,
    ) -> Result<HttpResponse> {
        let mut page = Self::new_page();
        page.set_input(form.into_inner().url);
        page.submit(service.get_ref().as_ref()).await;
        Ok(Self::render(&page))
    }

    /// No icon is shipped; browsers get an empty one instead of a redirect attempt
    pub async fn handle_favicon(_req: HttpRequest) -> Result<HttpResponse> {
        Ok(HttpResponse::Ok().content_type("image/x-icon").body(vec![]))
    }

    fn new_page() -> CreatePage {
        CreatePage::with_notification_ttl(get_config().ui.notification_ttl())
    }

    fn render(page: &CreatePage) -> HttpResponse {
        match CreatePageTemplate::from(page).render() {
            Ok(html) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .insert_header(("Cache-Control", "no-store"))
                .body(html),
            Err(e) => {
                error!("Failed to render creation page: {}", e);
                HttpResponse::InternalServerError()
                    .content_type("text/html; charset=utf-8")
                    .body("Internal Server Error")
            }
        }
    }
}

/// Routes for the creation page. Register before [`super::redirect_routes`].
pub fn frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(FrontendService::handle_index))
        .route("/", web::head().to(FrontendService::handle_index))
        .route("/", web::post().to(FrontendService::handle_submit))
        .route("/favicon.ico", web::get().to(FrontendService::handle_favicon));
}
