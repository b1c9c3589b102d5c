//! HTTP 实现
//!
//! 使用 ureq 同步请求，在 spawn_blocking 中执行，避免阻塞异步运行时

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use ureq::Agent;

use super::ShortenerService;
use super::models::{CreateShortUrlRequest, ResolveResponse, ServiceMessage, ShortUrlRecord};
use crate::config::ServiceConfig;
use crate::errors::{Result, ShortfrontError};

/// 远端拒绝请求但没有给出 message 时使用
const FALLBACK_REJECTION_MESSAGE: &str = "The shortening service rejected the request";

/// 远端短链服务的 HTTP 客户端
///
/// `Agent` 内部是 Arc，clone 很便宜；每个请求都受 `timeout_secs` 限制，
/// 超时按传输失败处理。
#[derive(Clone)]
pub struct HttpShortenerService {
    agent: Agent,
    base_url: String,
    resolve_base_url: String,
    created_by: String,
}

impl HttpShortenerService {
    pub fn new(config: &ServiceConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs.max(1))))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.base_url.clone(),
            resolve_base_url: config.resolve_base_url.clone(),
            created_by: config.created_by.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{resolve_base_url}/{code}`，code 做百分号编码
    pub fn resolve_url(&self, code: &str) -> String {
        format!(
            "{}/{}",
            self.resolve_base_url.trim_end_matches('/'),
            urlencoding::encode(code)
        )
    }

    fn create_sync(
        agent: Agent,
        url: String,
        body: CreateShortUrlRequest,
    ) -> Result<ShortUrlRecord> {
        let resp = agent
            .post(&url)
            .header("accept", "application/json")
            .send_json(&body)
            .map_err(|e| {
                warn!("Create request to \"{}\" failed: {}", url, e);
                ShortfrontError::transport_failure(e.to_string())
            })?;

        let status = resp.status();
        let text = resp.into_body().read_to_string().map_err(|e| {
            warn!("Create response from \"{}\" unreadable: {}", url, e);
            ShortfrontError::transport_failure(e.to_string())
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ServiceMessage>(&text)
                .ok()
                .and_then(|m| m.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| {
                    format!("{} (HTTP {})", FALLBACK_REJECTION_MESSAGE, status.as_u16())
                });
            debug!("Service rejected create with {}: {}", status, message);
            return Err(ShortfrontError::service_rejected(status.as_u16(), message));
        }

        let record: ShortUrlRecord = serde_json::from_str(&text).map_err(|e| {
            warn!("Create response from \"{}\" parse failed: {}", url, e);
            ShortfrontError::transport_failure(format!("Malformed response body: {}", e))
        })?;

        if record.url.is_empty() {
            return Err(ShortfrontError::transport_failure(
                "Response did not contain a short URL",
            ));
        }

        trace!("Created short url {} (code={})", record.url, record.code);
        Ok(record)
    }

    fn resolve_sync(agent: Agent, url: String) -> Result<ResolveResponse> {
        let resp = agent
            .get(&url)
            .header("accept", "application/json")
            .call()
            .map_err(|e| {
                warn!("Resolve request to \"{}\" failed: {}", url, e);
                ShortfrontError::resolution_failure(e.to_string())
            })?;

        // 状态码不参与判断，只看 body 里的 url / error
        let status = resp.status();
        let text = resp
            .into_body()
            .read_to_string()
            .map_err(|e| ShortfrontError::resolution_failure(e.to_string()))?;

        let parsed: ResolveResponse = serde_json::from_str(&text).map_err(|e| {
            debug!("Resolve response from \"{}\" ({}) parse failed: {}", url, status, e);
            ShortfrontError::resolution_failure(format!("Malformed response body: {}", e))
        })?;

        trace!("Resolve {} -> {:?}", url, parsed);
        Ok(parsed)
    }
}

#[async_trait]
impl ShortenerService for HttpShortenerService {
    async fn create_short_url(&self, long_url: &str) -> Result<ShortUrlRecord> {
        let agent = self.agent.clone();
        let url = self.base_url.clone();
        let body = CreateShortUrlRequest {
            url: long_url.to_string(),
            created_by: self.created_by.clone(),
        };

        tokio::task::spawn_blocking(move || Self::create_sync(agent, url, body))
            .await
            .unwrap_or_else(|e| {
                warn!("Create spawn_blocking failed: {}", e);
                Err(ShortfrontError::transport_failure(e.to_string()))
            })
    }

    async fn resolve(&self, code: &str) -> Result<ResolveResponse> {
        let agent = self.agent.clone();
        let url = self.resolve_url(code);

        tokio::task::spawn_blocking(move || Self::resolve_sync(agent, url))
            .await
            .unwrap_or_else(|e| {
                warn!("Resolve spawn_blocking failed: {}", e);
                Err(ShortfrontError::resolution_failure(e.to_string()))
            })
    }

    fn name(&self) -> &str {
        &self.base_url
    }
}
