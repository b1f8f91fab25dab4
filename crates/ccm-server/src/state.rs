use ccm_core::config::{Config, ProjectEntry};
use ccm_core::lock::SettingsLocks;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// `~/.claude/settings.json`, resolved once at startup.
    pub user_settings: PathBuf,
    pub locks: SettingsLocks,
}

impl AppState {
    pub fn new(config: Config, user_settings: PathBuf) -> Self {
        Self {
            config: Arc::new(config),
            user_settings,
            locks: SettingsLocks::new(),
        }
    }

    /// Settings path for a registered project.
    pub fn project_settings(&self, project_id: &str) -> ccm_core::Result<PathBuf> {
        self.config.project(project_id).map(ProjectEntry::settings_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_project_settings() {
        let mut config = Config::default();
        config.add_project("web", PathBuf::from("/src/web")).unwrap();
        let state = AppState::new(config, PathBuf::from("/home/u/.claude/settings.json"));

        assert_eq!(
            state.project_settings("web").unwrap(),
            PathBuf::from("/src/web/.claude/settings.json")
        );
        assert!(state.project_settings("api").is_err());
    }
}
