//! vault-delete: loads the delete-file plugin into a local vault host.
//!
//! # Usage
//!
//! ```text
//! vault-delete [--vault <DIR>] [--log-level <LEVEL>] <COMMAND>
//!
//! Commands:
//!   commands                     List the commands the plugin registers
//!   run <ID> [--active <PATH>]   Run a command with PATH as the active file
//!   settings                     Show the plugin settings panel
//!   set-notifications <BOOL>     Toggle "Show Delete Notifications"
//!   watch                        Report deletions in the vault until Ctrl-C
//! ```
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()              <vault>/.vault/app.toml
//!  └─ LocalVault::open()         index + active file + event channel
//!  └─ DeleteFilePlugin::load()   settings, deletion observer, commands
//!  └─ dispatch subcommand
//!  └─ DeleteFilePlugin::unload()
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vault_delete::application::commands::CommandOutcome;
use vault_delete::application::plugin::DeleteFilePlugin;
use vault_delete::infrastructure;
use vault_delete::infrastructure::local_vault::watcher::VaultWatcher;
use vault_delete::infrastructure::local_vault::LocalVault;
use vault_delete::infrastructure::storage::config::load_config;
use vault_delete::infrastructure::ui::command_palette::CommandPalette;
use vault_delete::infrastructure::ui::settings_view::TextSettingsView;

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "vault-delete",
    version,
    about = "Delete-file commands and deletion notices for a note vault"
)]
struct Cli {
    /// Vault directory.
    #[arg(long, default_value = ".", env = "VAULT_DELETE_VAULT")]
    vault: PathBuf,

    /// Log level used when `RUST_LOG` is not set.  Overrides `app.toml`.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the commands the plugin registers.
    Commands,

    /// Run a plugin command.
    Run {
        /// Command id, e.g. `delete-current-file`.
        id: String,

        /// Vault-relative path of the file to treat as active.
        #[arg(long)]
        active: Option<String>,
    },

    /// Show the plugin settings panel.
    Settings,

    /// Turn deletion notices on or off.
    SetNotifications {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },

    /// Report deletions made in the vault until Ctrl-C.
    Watch,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config(&cli.vault)
        .with_context(|| format!("could not load host config for {}", cli.vault.display()))?;

    // Level is overridden by `RUST_LOG`.
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let vault = Arc::new(
        LocalVault::open(&cli.vault, config.vault.trash_mode)
            .with_context(|| format!("could not open vault {}", cli.vault.display()))?,
    );
    let plugin = DeleteFilePlugin::load(infrastructure::local_host(Arc::clone(&vault))).await;

    let code = run(cli.command, &vault, &plugin).await?;

    plugin.unload().await;
    Ok(code)
}

async fn run(
    command: Command,
    vault: &Arc<LocalVault>,
    plugin: &DeleteFilePlugin,
) -> anyhow::Result<ExitCode> {
    match command {
        Command::Commands => {
            for entry in CommandPalette::register(plugin).entries() {
                println!("{}\t{}", entry.id, entry.name);
            }
        }

        Command::Run { id, active } => {
            if let Some(path) = active {
                vault
                    .set_active_file(&path)
                    .with_context(|| format!("cannot focus '{path}'"))?;
            }
            let outcome = CommandPalette::register(plugin).invoke(&id).await?;
            if outcome != CommandOutcome::Completed {
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::Settings => print_settings(plugin).await,

        Command::SetNotifications { enabled } => {
            plugin
                .settings_tab()
                .set_show_delete_notification(enabled)
                .await
                .context("could not save plugin settings")?;
            print_settings(plugin).await;
        }

        Command::Watch => {
            let _watcher = VaultWatcher::start(Arc::clone(vault))?;
            info!("watching {}; press Ctrl-C to stop", vault.root().display());
            tokio::signal::ctrl_c()
                .await
                .context("failed to listen for Ctrl-C")?;
            info!("shutdown signal received");
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn print_settings(plugin: &DeleteFilePlugin) {
    let mut view = TextSettingsView::new();
    plugin.settings_tab().display(&mut view).await;
    print!("{view}");
}
