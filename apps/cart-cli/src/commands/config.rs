//! # Config Commands

use tracing::debug;

use crate::config::CliConfig;

/// Returns the effective configuration after file and env overrides.
pub fn get_config(config: &CliConfig) -> CliConfig {
    debug!("get_config command");
    config.clone()
}
