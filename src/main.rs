use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

mod app;
mod browser;
mod cli;
mod commands;
mod defaults;
mod error;
mod kube;
mod screens;
mod secrets;
mod ui;
mod wizard;

use crate::cli::{Cli, Command, TuiArgs};
use crate::defaults::Defaults;
use crate::kube::Kubectl;
use crate::secrets::FileMode;
use crate::ui::style::Theme;
use crate::wizard::WizardConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.cmd, None | Some(Command::Tui(_)));
    init_logging(cli.log_file.as_deref(), interactive)?;

    match cli.cmd {
        None => run_tui(TuiArgs::default()).await,
        Some(Command::Tui(args)) => run_tui(args).await,

        Some(Command::Yaml { target }) => {
            let spec = commands::create::spec_from_args(target, FileMode::YamlMap, None);
            let manifest = commands::create::generate(&spec, &Kubectl::default()).await?;
            commands::create::emit(&manifest, &mut io::stdout().lock())
        }

        Some(Command::File { target, key }) => {
            let spec = commands::create::spec_from_args(target, FileMode::RawFile, Some(key));
            let manifest = commands::create::generate(&spec, &Kubectl::default()).await?;
            commands::create::emit(&manifest, &mut io::stdout().lock())
        }
    }
}

async fn run_tui(args: TuiArgs) -> Result<()> {
    let config = WizardConfig::resolve(args)?;
    app::run_wizard(config, Box::new(Kubectl::default()), Theme::default()).await
}

/// RUST_LOG wins over the built-in filter. Without a log file the wizard
/// only lets errors through so stderr does not draw over the screen.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let fallback = if interactive && log_file.is_none() { "goseal=error" } else { Defaults::LOG_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    match log_file {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}
