use crate::error::{CcmError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SETTINGS_FILE: &str = ".claude/settings.json";

pub const CCM_DIR: &str = ".ccm";
pub const CONFIG_FILE: &str = "config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `<project>/.claude/settings.json`
pub fn project_settings_path(project_root: &Path) -> PathBuf {
    project_root.join(SETTINGS_FILE)
}

/// `~/.claude/settings.json`
pub fn user_settings_path() -> Result<PathBuf> {
    Ok(home()?.join(SETTINGS_FILE))
}

/// `~/.ccm/config.yaml`
pub fn default_config_path() -> Result<PathBuf> {
    Ok(home()?.join(CCM_DIR).join(CONFIG_FILE))
}

fn home() -> Result<PathBuf> {
    home::home_dir().ok_or(CcmError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Project id validation
// ---------------------------------------------------------------------------

static PROJECT_ID_RE: OnceLock<Regex> = OnceLock::new();

fn project_id_re() -> &'static Regex {
    PROJECT_ID_RE
        .get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

pub fn validate_project_id(id: &str) -> Result<()> {
    if id.is_empty() || id.len() > 64 || !project_id_re().is_match(id) {
        return Err(CcmError::InvalidProjectId(id.to_string()));
    }
    Ok(())
}

/// Derive a project id from a directory name: lowercase, runs of anything
/// outside `[a-z0-9]` collapsed to one hyphen, trimmed of hyphens.
pub fn project_id_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let mut id = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            id.push(c);
        } else if !id.ends_with('-') {
            id.push('-');
        }
    }
    let id = id.trim_matches('-');
    id.chars().take(64).collect::<String>().trim_end_matches('-').to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
