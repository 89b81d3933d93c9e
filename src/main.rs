use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use news_explorer::api::{Category, Transport};
use news_explorer::app::{App, InputMode};
use news_explorer::config::Config;
use news_explorer::ui;
use ratatui::prelude::*;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "news-explorer")]
#[command(about = "Browse NewsAPI top headlines in the terminal", long_about = None)]
struct Cli {
    /// Starting category (overrides the config default)
    #[arg(short, long)]
    category: Option<Category>,

    /// Starting keyword search
    #[arg(short, long)]
    query: Option<String>,

    /// Comma-separated source ids; overrides the category
    #[arg(short, long, value_delimiter = ',')]
    sources: Vec<String>,

    /// Log file (defaults to news-explorer.log in the config directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<PathBuf>) -> Result<()> {
    let path = match log_file {
        Some(p) => p,
        None => Config::config_dir()?.join("news-explorer.log"),
    };
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.clone())?;

    // Missing credential is fatal; fail before touching the terminal
    let mut app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "startup failed");
            return Err(e);
        }
    };
    if let Some(category) = cli.category {
        app.filter.category = category;
    }
    if let Some(q) = &cli.query {
        app.filter.set_keyword(q);
    }
    for id in cli.sources.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        app.filter.toggle_source(id);
    }
    info!(category = %app.filter.category, "news-explorer starting up");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!(error = %e, "event loop aborted");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn run_app<B: Backend, T: Transport>(terminal: &mut Terminal<B>, app: &mut App<T>) -> Result<()> {
    // Initial load; draw once first so the loading state is visible
    app.loading = true;
    terminal.draw(|frame| ui::draw(frame, app))?;
    app.get_news().await;

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Keeps the "As of" clock ticking
        let timeout = Duration::from_millis(250);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.input_mode {
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('?') => app.show_help(),
                        KeyCode::Char('g') | KeyCode::Char('r') => {
                            app.loading = true;
                            terminal.draw(|frame| ui::draw(frame, app))?;
                            app.get_news().await;
                        }
                        KeyCode::Char('c') => app.next_category(),
                        KeyCode::Char('C') => app.prev_category(),
                        KeyCode::Char('/') => app.start_keyword(),
                        KeyCode::Char('s') => app.open_source_picker(),
                        KeyCode::Char('x') => app.clear_sources(),
                        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                        KeyCode::Enter => app.show_article_detail(),
                        _ => {}
                    },
                    InputMode::Keyword => match key.code {
                        KeyCode::Enter => app.confirm_keyword(),
                        KeyCode::Esc => app.cancel_input(),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Char(c) => {
                            app.input_buffer.push(c);
                        }
                        _ => {}
                    },
                    InputMode::SourcePicker => match key.code {
                        KeyCode::Esc | KeyCode::Enter => app.close_source_picker(),
                        KeyCode::Char(' ') => app.toggle_source_at_cursor(),
                        KeyCode::Char('x') => app.clear_sources(),
                        KeyCode::Up | KeyCode::Char('k') => app.source_cursor_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.source_cursor_down(),
                        _ => {}
                    },
                    InputMode::ArticleDetail => match key.code {
                        KeyCode::Esc | KeyCode::Enter => app.close_article_detail(),
                        KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
                        _ => {}
                    },
                    InputMode::Help => match key.code {
                        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
                        _ => {}
                    },
                }
            }
        }
    }
}
