use anyhow::Context;
use ccm_core::{config::Config, paths};
use ccm_server::AppState;
use std::path::Path;

pub fn run(config_path: &Path, port: Option<u16>) -> anyhow::Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    let port = port.unwrap_or(config.port);
    let user_settings = paths::user_settings_path()?;
    let projects = config.projects.len();
    let state = AppState::new(config, user_settings);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
        let actual_port = listener.local_addr()?.port();
        println!("ccm → http://localhost:{actual_port}  ({projects} projects registered)");

        tokio::select! {
            res = ccm_server::serve_on(state, listener) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
