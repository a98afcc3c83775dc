mod app;
mod config;
mod data;
mod logging;
mod model;
mod ui;

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    self as ct_event, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
    KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::app::{App, ClickTarget};
use crate::config::DriveConfig;
use crate::data::dataset::Dataset;
use crate::data::listing;
use crate::data::opener::{LinkOpener, NoopOpener, SystemOpener};

#[derive(Parser)]
#[command(
    name = "drive",
    version,
    about = "Drive - terminal file browser over a fixed dataset",
    override_help = HELP_TEXT,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (defaults to .drive.toml in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON dataset to browse instead of the built-in sample
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print the breadcrumbs and listing of a folder path
    Ls {
        /// Folder ids from the root, e.g. `1 1-1`
        ids: Vec<String>,
    },
    /// Print the whole dataset as an indented tree
    Tree,
    /// Print the dataset as JSON (the format --data accepts)
    Export,
}

const HELP_TEXT: &str = "\
Drive - terminal file browser over a fixed dataset

USAGE:
  drive [OPTIONS]              Browse the dataset interactively
  drive ls [ID]...             Print the listing of a folder path
  drive tree                   Print the whole dataset as a tree
  drive export                 Print the dataset as JSON

GLOBAL OPTIONS:
  --config <FILE>    Config file [default: ./.drive.toml]
  --data <FILE>      JSON dataset to browse [default: built-in sample]
  --log-file <FILE>  Write logs to FILE (filter with RUST_LOG)
  -h, --help         Print this help
  -V, --version      Print version

TUI KEYBINDINGS:
  j/k  Up/Down           Move selection
  Enter  l  Right        Open folder / open file link in browser
  Backspace  h  Left     Up one folder
  ~ / H                  Go to My Drive
  0-9                    Jump to breadcrumb (0 = My Drive)
  g / G                  Jump to top / bottom
  u                      Upload (not available)
  Mouse click            Open folder, file link, or breadcrumb
  ?                      Toggle help overlay
  q / Ctrl+C             Quit

EXAMPLES:
  drive
  drive ls 1 1-1
  drive export > tree.json && drive --data tree.json";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    let (config, config_problem) = config::load_config(&cwd, cli.config.as_deref());

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.log_file().map(|p| cwd.join(p)));
    if let Some(ref path) = log_file {
        logging::init_global(path, config.log_level())?;
    }
    if let Some(problem) = config_problem {
        tracing::warn!(%problem, "ignoring unreadable config");
    }

    let dataset = load_dataset(&cwd, cli.data.as_deref(), &config)?;
    tracing::info!(source = dataset.source(), items = dataset.len(), "dataset loaded");

    match cli.command {
        Some(Command::Ls { ids }) => {
            print!("{}", listing::render_listing(dataset.items(), ids.as_slice()));
            Ok(())
        }
        Some(Command::Tree) => {
            print!("{}", listing::render_tree(dataset.items()));
            Ok(())
        }
        Some(Command::Export) => {
            println!("{}", dataset.to_json_pretty()?);
            Ok(())
        }
        None => run_tui(dataset, &config),
    }
}

/// `--data` wins over `[data] path`; with neither, use the built-in sample.
fn load_dataset(cwd: &Path, cli_path: Option<&Path>, config: &DriveConfig) -> Result<Dataset> {
    match cli_path {
        Some(p) => Dataset::load_file(p),
        None => match config.data_path() {
            Some(p) => Dataset::load_file(&cwd.join(p)),
            None => Ok(Dataset::sample()),
        },
    }
}

fn run_tui(dataset: Dataset, config: &DriveConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, dataset, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "tui exited with error");
        eprintln!("Error: {:#}", e);
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    dataset: Dataset,
    config: &DriveConfig,
) -> Result<()> {
    let opener: Box<dyn LinkOpener> = if config.open_links() {
        Box::new(SystemOpener)
    } else {
        Box::new(NoopOpener)
    };
    let mut app = App::new(dataset, opener)
        .with_status_ttl(Duration::from_secs(config.status_ttl()));
    app.title = config.title().to_string();

    let tick_rate = Duration::from_millis(config.tick_rate());
    let mut last_tick = Instant::now();

    loop {
        // Draw only when dirty
        if app.dirty {
            let mut area = Rect::default();
            terminal
                .draw(|f| {
                    area = f.area();
                    ui::draw(f, &app);
                })
                .context("failed to draw frame")?;
            app.viewport = area;
            app.dirty = false;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if ct_event::poll(timeout)? {
            match ct_event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut app, key);
                    app.mark_dirty();
                }
                Event::Mouse(mouse) => {
                    if handle_mouse(&mut app, mouse) {
                        app.mark_dirty();
                    }
                }
                Event::Resize(_, _) => app.mark_dirty(),
                _ => {}
            }
        }

        // Tick
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
            if app.status.is_some() {
                app.clear_stale_status();
                if app.status.is_none() {
                    app.mark_dirty();
                }
            }
        }

        if app.should_quit {
            tracing::info!("quit");
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keybindings (always active)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Esc if app.show_help => {
            app.show_help = false;
            return;
        }
        _ => {}
    }

    // Don't process other keys when help is showing
    if app.show_help {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Selection
        KeyCode::Char('j') | KeyCode::Down => app.navigate_down(),
        KeyCode::Char('k') | KeyCode::Up => app.navigate_up(),
        KeyCode::Char('g') => app.jump_top(),
        KeyCode::Char('G') => app.jump_bottom(),

        // Navigation
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.activate_selected(),
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => app.go_up(),
        KeyCode::Char('~') | KeyCode::Char('H') => app.click(ClickTarget::Home),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let idx = (c as usize) - ('0' as usize);
            app.click(ClickTarget::Crumb(idx));
        }

        KeyCode::Char('u') => app.click(ClickTarget::Upload),

        _ => {}
    }
}

/// Returns true when the click changed something worth redrawing.
fn handle_mouse(app: &mut App, mouse: MouseEvent) -> bool {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.show_help {
                app.show_help = false;
                return true;
            }
            match ui::layout::hit_test(app, mouse.column, mouse.row) {
                Some(target) => {
                    app.click(target);
                    true
                }
                None => false,
            }
        }
        MouseEventKind::ScrollDown => {
            app.navigate_down();
            true
        }
        MouseEventKind::ScrollUp => {
            app.navigate_up();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::opener::testing::RecordingOpener;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> (App, RecordingOpener) {
        let opener = RecordingOpener::default();
        let mut app = App::new(Dataset::sample(), Box::new(opener.clone()));
        app.viewport = Rect::new(0, 0, 80, 20);
        (app, opener)
    }

    #[test]
    fn keys_walk_into_and_out_of_folders() {
        let (mut app, _) = test_app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.path(), &["1".to_string()]);
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.path(), &["1".to_string(), "1-2".to_string()]);
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.path(), &["1".to_string()]);
        handle_key(&mut app, key(KeyCode::Char('~')));
        assert!(app.path().is_empty());
    }

    #[test]
    fn digit_jumps_to_breadcrumb() {
        let (mut app, _) = test_app();
        app.open_folder("1");
        app.open_folder("1-1");
        handle_key(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.path(), &["1".to_string()]);
        handle_key(&mut app, key(KeyCode::Char('9')));
        assert_eq!(app.path(), &["1".to_string()]);
        handle_key(&mut app, key(KeyCode::Char('0')));
        assert!(app.path().is_empty());
    }

    #[test]
    fn enter_on_file_opens_link() {
        let (mut app, opener) = test_app();
        handle_key(&mut app, key(KeyCode::Char('G')));
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.path().is_empty());
        assert_eq!(opener.opened.borrow().len(), 1);
    }

    #[test]
    fn help_swallows_navigation_keys() {
        let (mut app, _) = test_app();
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.path().is_empty());
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn quit_keys() {
        let (mut app, _) = test_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);

        let (mut app, _) = test_app();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn left_click_on_folder_row_opens_it() {
        let (mut app, _) = test_app();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 70,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert!(handle_mouse(&mut app, click));
        assert_eq!(app.path(), &["2".to_string()]);
    }

    #[test]
    fn click_closes_help_first() {
        let (mut app, _) = test_app();
        app.show_help = true;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 70,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert!(handle_mouse(&mut app, click));
        assert!(!app.show_help);
        assert!(app.path().is_empty());
    }

    #[test]
    fn dataset_source_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"[{"id":"x","name":"Only","type":"folder","modifiedDate":"2025-03-01"}]"#;
        std::fs::write(dir.path().join("tree.json"), json).unwrap();
        std::fs::write(dir.path().join(".drive.toml"), "[data]\npath = \"tree.json\"\n").unwrap();

        let (config, _) = config::load_config(dir.path(), None);
        let ds = load_dataset(dir.path(), None, &config).unwrap();
        assert_eq!(ds.items()[0].name, "Only");

        let (empty, _) = config::load_config(Path::new("/nonexistent"), None);
        let ds = load_dataset(dir.path(), None, &empty).unwrap();
        assert_eq!(ds.items().len(), 3);
    }
}
