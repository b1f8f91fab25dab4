use crate::error::{CcmError, Result};
use crate::io::atomic_write;
use crate::paths::{self, validate_project_id};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ProjectEntry
// ---------------------------------------------------------------------------

/// A registered project whose `.claude/settings.json` can be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub path: PathBuf,
}

impl ProjectEntry {
    pub fn settings_path(&self) -> PathBuf {
        paths::project_settings_path(&self.path)
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

fn default_port() -> u16 {
    3142
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            projects: Vec::new(),
        }
    }
}

impl Config {
    /// Load from `path`; a missing file yields the default config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        for p in &cfg.projects {
            validate_project_id(&p.id)?;
        }
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        atomic_write(path, data.as_bytes())
    }

    pub fn project(&self, id: &str) -> Result<&ProjectEntry> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CcmError::ProjectNotFound(id.to_string()))
    }

    /// Register `path` under `id`. Ids must be unique slugs.
    pub fn add_project(&mut self, id: &str, path: PathBuf) -> Result<&ProjectEntry> {
        validate_project_id(id)?;
        if self.projects.iter().any(|p| p.id == id) {
            return Err(CcmError::ProjectExists(id.to_string()));
        }
        self.projects.push(ProjectEntry {
            id: id.to_string(),
            path,
        });
        Ok(&self.projects[self.projects.len() - 1])
    }

    pub fn remove_project(&mut self, id: &str) -> Result<ProjectEntry> {
        let pos = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CcmError::ProjectNotFound(id.to_string()))?;
        Ok(self.projects.remove(pos))
    }
}
