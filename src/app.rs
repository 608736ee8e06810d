use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::TuiArgs;
use crate::defaults::Defaults;
use crate::kube::SecretBuilder;
use crate::ui::style::Theme;
use crate::wizard::{Flow, WizardConfig, WizardController};

impl WizardConfig {
    /// Fills in unset arguments: working directory, home directory, `secret.yaml`.
    pub fn resolve(args: TuiArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("reading working directory")?;
        let cert_dir = match args.cert_dir {
            Some(dir) => dir,
            None => dirs::home_dir().context("cannot determine the home directory")?,
        };
        let output_path = args.output.unwrap_or_else(|| PathBuf::from(Defaults::OUTPUT_FILE));
        Ok(Self {
            source_dir: args.start_dir.unwrap_or_else(|| cwd.clone()),
            cert_dir,
            output_path: if output_path.is_absolute() { output_path } else { cwd.join(output_path) },
        })
    }
}

pub async fn run_wizard(config: WizardConfig, builder: Box<dyn SecretBuilder>, theme: Theme) -> Result<()> {
    tracing::info!(
        source = %config.source_dir.display(),
        certs = %config.cert_dir.display(),
        output = %config.output_path.display(),
        "starting wizard"
    );

    // terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?; // clean start

    let mut wizard = WizardController::new(config, builder);
    let result = event_loop(&mut terminal, &mut wizard, &theme).await;

    // restore, also when the session failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "wizard aborted");
    } else if let Some(o) = wizard.outcome() {
        println!("✓ Wrote {}", o.output_path.display());
    }
    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    wizard: &mut WizardController,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|f| wizard.draw(f, theme))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                // The key is fully handled, including any build and write,
                // before the next event is read.
                if wizard.on_key(k).await? == Flow::Exit {
                    break;
                }
            }
        }
    }
    Ok(())
}
