use std::path::{Path, PathBuf};

use crate::error::{LauncherError, Result};
use crate::models::ClusterConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config/storm-supervisor.yaml";
pub const CONFIG_PATH_ENV: &str = "ZK_LAUNCH_CONFIG";

/// `$ZK_LAUNCH_CONFIG`, falling back to the default path under the working directory.
pub fn config_path_from_env() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn load(config_path: &Path) -> Result<ClusterConfig> {
    if !config_path.exists() {
        return Err(LauncherError::ConfigNotFound(config_path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(config_path)?;
    let config: ClusterConfig = serde_yaml::from_str(&contents)
        .map_err(|e| LauncherError::InvalidConfig(e.to_string()))?;
    if config.storm_yaml.zookeeper_servers.is_empty() {
        return Err(LauncherError::InvalidConfig(
            "storm.yaml -> storm.zookeeper.servers must list at least one server".into(),
        ));
    }
    tracing::debug!(
        path = %config_path.display(),
        servers = config.servers.len(),
        "loaded cluster config"
    );
    Ok(config)
}
