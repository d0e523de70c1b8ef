use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};

use arctui::app::App;
use arctui::config::Config;
use arctui::{handlers, ui, utils};

/// Terminal archive manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to a file in the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: ~/.config/arctui/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to browse from (default: config start_dir, then home)
    #[arg(short, long)]
    root: Option<PathBuf>,
}

fn init_logging() -> Result<()> {
    // The terminal is in raw/alternate-screen mode, so logs go to a file
    let log_file = std::fs::File::create(utils::debug_log_path())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn resolve_browse_root(cli_root: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    let root = cli_root
        .or_else(|| config.start_dir.clone())
        .or_else(dirs::home_dir)
        .context("could not determine a browse root (no home directory)")?;

    if !root.is_dir() {
        anyhow::bail!("browse root is not a directory: {}", root.display());
    }
    Ok(root)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        init_logging()?;
    }

    let config = Config::load(args.config.as_deref())?;
    let browse_root = resolve_browse_root(args.root, &config)?;

    tracing::info!("starting with browse root {:?}", browse_root);

    let mut app = App::new(config, browse_root);

    // Setup terminal; failure here aborts with a non-zero status
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Release the terminal deterministically, even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Blocking operations (archive jobs) run inside the key handler on
        // this thread; the poll timeout just keeps toast dismissal ticking.
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
