use crate::output::{print_json, print_table};
use anyhow::Context;
use ccm_core::{config::Config, paths};
use clap::Subcommand;
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum ProjectSubcommand {
    /// Register a project directory
    Add {
        path: PathBuf,
        /// Project id (default: derived from the directory name)
        #[arg(long)]
        id: Option<String>,
    },
    /// List registered projects
    List,
    /// Unregister a project (its files are left alone)
    Remove { id: String },
}

pub fn run(config_path: &Path, subcmd: ProjectSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ProjectSubcommand::Add { path, id } => add(config_path, &path, id.as_deref(), json),
        ProjectSubcommand::List => list(config_path, json),
        ProjectSubcommand::Remove { id } => remove(config_path, &id, json),
    }
}

fn load(config_path: &Path) -> anyhow::Result<Config> {
    Config::load(config_path).with_context(|| format!("failed to load {}", config_path.display()))
}

fn add(config_path: &Path, path: &Path, id: Option<&str>, json: bool) -> anyhow::Result<()> {
    let path = std::fs::canonicalize(path)
        .with_context(|| format!("project directory '{}' not found", path.display()))?;
    anyhow::ensure!(path.is_dir(), "'{}' is not a directory", path.display());
    let id = match id {
        Some(id) => id.to_string(),
        None => paths::project_id_from_path(&path),
    };

    let mut config = load(config_path)?;
    let entry = config.add_project(&id, path)?.clone();
    config.save(config_path).context("failed to save config")?;

    if json {
        print_json(&json!({ "id": entry.id, "path": entry.path }))?;
    } else {
        println!("Registered '{}' → {}", entry.id, entry.path.display());
    }
    Ok(())
}

fn list(config_path: &Path, json: bool) -> anyhow::Result<()> {
    let config = load(config_path)?;
    if json {
        return print_json(&config.projects);
    }
    if config.projects.is_empty() {
        println!("No projects registered. Add one with `ccm project add <path>`.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = config
        .projects
        .iter()
        .map(|p| {
            let settings = p.settings_path();
            vec![
                p.id.clone(),
                p.path.display().to_string(),
                if settings.exists() { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "PATH", "SETTINGS"], &rows);
    Ok(())
}

fn remove(config_path: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let mut config = load(config_path)?;
    let removed = config.remove_project(id)?;
    config.save(config_path).context("failed to save config")?;

    if json {
        print_json(&json!({ "id": removed.id, "removed": true }))?;
    } else {
        println!("Removed '{}'", removed.id);
    }
    Ok(())
}
