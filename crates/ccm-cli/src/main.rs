mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{hook::HookSubcommand, project::ProjectSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ccm",
    about = "View and edit Claude Code hook settings for your projects",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ~/.ccm/config.yaml)
    #[arg(long, global = true, env = "CCM_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Port to listen on (default: config `port`; 0 = OS-assigned)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Manage registered projects
    Project {
        #[command(subcommand)]
        subcommand: ProjectSubcommand,
    },

    /// List, update, and delete hooks
    Hook {
        #[command(subcommand)]
        subcommand: HookSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = root::resolve_config_path(cli.config.as_deref()).and_then(|config_path| {
        match cli.command {
            Commands::Serve { port } => cmd::serve::run(&config_path, port),
            Commands::Project { subcommand } => cmd::project::run(&config_path, subcommand, cli.json),
            Commands::Hook { subcommand } => cmd::hook::run(&config_path, subcommand, cli.json),
        }
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
