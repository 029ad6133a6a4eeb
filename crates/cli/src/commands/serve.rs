//! `veggietools serve`: Start the HTTP gateway.

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use veggietools_config::AppConfig;
use veggietools_core::Error;
use veggietools_knowledge::KnowledgeStore;

pub async fn run(
    config_path: &Path,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (config, store) = prepare(config_path, host_override, port_override)?;

    info!(
        addr = %config.gateway.bind_addr(),
        service = %config.service.name,
        "Starting VeggieTools gateway"
    );

    veggietools_gateway::start(config, Arc::new(store)).await?;

    Ok(())
}

/// Load and validate the config with flag overrides, then check the store.
fn prepare(
    config_path: &Path,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> veggietools_core::Result<(AppConfig, KnowledgeStore)> {
    let mut config = AppConfig::load_with_env(config_path).map_err(|e| Error::Config {
        message: e.to_string(),
    })?;

    if let Some(host) = host_override {
        config.gateway.host = host;
    }
    if let Some(port) = port_override {
        config.gateway.port = port;
    }
    config.validate().map_err(|e| Error::Config {
        message: e.to_string(),
    })?;

    let store = KnowledgeStore::builtin();
    store
        .validate()
        .map_err(|e| Error::Internal(format!("built-in knowledge store is invalid: {e}")))?;

    info!(
        plants = store.len(),
        zones = store.zones().count(),
        "Knowledge store validated"
    );

    Ok((config, store))
}
