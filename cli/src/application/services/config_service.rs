//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::TerracottaConfig;

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<TerracottaConfig> {
    let config = store.load()?;
    tracing::info!(
        path = %store.path().display(),
        base_path = %config.base_path.display(),
        modules = config.modules.len(),
        "loaded config"
    );
    Ok(config)
}
