use anyhow::{Result, bail};
use std::sync::Arc;
use tracing::{debug, info};

use crate::client::{HttpShortenerService, ShortenerService};
use crate::config::StaticConfig;
use crate::errors::ShortfrontError;
use crate::utils::is_valid_url;

pub struct StartupContext {
    pub service: Arc<dyn ShortenerService>,
}

/// 准备启动上下文：校验服务地址并构建远端短链服务客户端
///
/// server / tui / cli 共用
pub fn prepare_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    for (key, value) in [
        ("service.base_url", &config.service.base_url),
        ("service.resolve_base_url", &config.service.resolve_base_url),
    ] {
        if !is_valid_url(value) {
            bail!(ShortfrontError::config(format!(
                "{} must be an http(s) URL, got {:?}",
                key, value
            )));
        }
    }

    if config.service.timeout_secs == 0 {
        bail!(ShortfrontError::config(
            "service.timeout_secs must be greater than zero"
        ));
    }

    let service = HttpShortenerService::new(&config.service);
    info!(
        "Using shortening service at {} (resolve: {}, timeout {}s)",
        service.base_url(),
        config.service.resolve_base_url,
        config.service.timeout_secs
    );

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        service: Arc::new(service),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = StaticConfig::default();
        config.service.base_url = "ftp://short.example".into();
        let err = prepare_startup(&config).err().unwrap();
        assert!(err.to_string().contains("service.base_url"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = StaticConfig::default();
        config.service.timeout_secs = 0;
        assert!(prepare_startup(&config).is_err());
    }

    #[test]
    fn test_default_config_starts() {
        let ctx = prepare_startup(&StaticConfig::default()).unwrap();
        assert_eq!(ctx.service.name(), "https://short.corvux.co");
    }
}
