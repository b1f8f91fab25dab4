use crate::output::{print_json, print_table, truncate};
use anyhow::Context;
use ccm_core::{config::Config, lock::SettingsLocks, paths, service};
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum HookSubcommand {
    /// List hooks with their identifiers
    List {
        /// Registered project id (default: user settings)
        #[arg(long)]
        project: Option<String>,
    },
    /// Apply a partial update, e.g. `ccm hook update 'Stop::::0' '{"timeout":5000}'`
    Update {
        hook_id: String,
        /// JSON object with any of: matcher, type, command, timeout, enabled,
        /// suppressOutput, continue
        fields: String,
        #[arg(long)]
        project: Option<String>,
    },
    /// Delete a hook
    Delete {
        hook_id: String,
        #[arg(long)]
        project: Option<String>,
    },
}

pub fn run(config_path: &Path, subcmd: HookSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        HookSubcommand::List { project } => list(config_path, project.as_deref(), json),
        HookSubcommand::Update {
            hook_id,
            fields,
            project,
        } => update(config_path, project.as_deref(), &hook_id, &fields, json),
        HookSubcommand::Delete { hook_id, project } => {
            delete(config_path, project.as_deref(), &hook_id, json)
        }
    }
}

/// Settings file for `project`, or the user settings when `None`.
fn settings_path(config_path: &Path, project: Option<&str>) -> anyhow::Result<PathBuf> {
    match project {
        Some(id) => {
            let config = Config::load(config_path)
                .with_context(|| format!("failed to load {}", config_path.display()))?;
            Ok(config.project(id)?.settings_path())
        }
        None => Ok(paths::user_settings_path()?),
    }
}

fn list(config_path: &Path, project: Option<&str>, json: bool) -> anyhow::Result<()> {
    let path = settings_path(config_path, project)?;
    let hooks = service::list_hooks(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    if json {
        return print_json(&hooks);
    }
    if hooks.is_empty() {
        println!("No hooks in {}", path.display());
        return Ok(());
    }
    let rows: Vec<Vec<String>> = hooks
        .iter()
        .map(|h| {
            vec![
                h.hook_id.encode(),
                h.record.type_name().to_string(),
                truncate(h.record.command().unwrap_or("-"), 48),
                h.record
                    .timeout()
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                match h.record.enabled() {
                    Some(false) => "no".to_string(),
                    _ => "yes".to_string(),
                },
            ]
        })
        .collect();
    print_table(&["HOOK ID", "TYPE", "COMMAND", "TIMEOUT", "ENABLED"], &rows);
    Ok(())
}

fn update(
    config_path: &Path,
    project: Option<&str>,
    hook_id: &str,
    fields: &str,
    json: bool,
) -> anyhow::Result<()> {
    let body: serde_json::Value =
        serde_json::from_str(fields).context("fields must be a JSON object")?;
    let path = settings_path(config_path, project)?;
    let hook = service::update_hook(&SettingsLocks::new(), &path, hook_id, &body)?;

    if json {
        print_json(&hook)?;
    } else if hook.hook_id.encode() != hook_id {
        println!("Updated {hook_id} (now {})", hook.hook_id);
    } else {
        println!("Updated {hook_id}");
    }
    Ok(())
}

fn delete(config_path: &Path, project: Option<&str>, hook_id: &str, json: bool) -> anyhow::Result<()> {
    let path = settings_path(config_path, project)?;
    let hook = service::delete_hook(&SettingsLocks::new(), &path, hook_id)?;

    if json {
        print_json(&hook)?;
    } else {
        println!("Deleted {}", hook.hook_id);
    }
    Ok(())
}
