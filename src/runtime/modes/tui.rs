//! TUI mode
//!
//! Builds the service client and hands over to the terminal UI.

use anyhow::Result;

use crate::config::StaticConfig;
use crate::runtime::lifetime;

pub async fn run_tui(config: &StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_startup(config)?;
    crate::interfaces::tui::run_tui(startup.service, config.ui.notification_ttl()).await
}
