use anyhow::Context;
use ccm_core::paths;
use std::path::{Path, PathBuf};

/// Resolve the config file path.
///
/// Priority:
/// 1. `--config` flag / `CCM_CONFIG` env var (passed in as `explicit`)
/// 2. `~/.ccm/config.yaml`
pub fn resolve_config_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    paths::default_config_path().context("cannot locate default config; pass --config")
}
