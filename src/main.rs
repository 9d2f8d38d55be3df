//! folio: a keyboard-driven portfolio page in the terminal.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use folio::app_state::{AppState, Focus};
use folio::config::Config;
use folio::contact::LocalSubmitter;
use folio::page::{PageSettings, PageView};
use folio::section::HEADER_ITEMS;
use folio::shortcuts::{KeyPress, Modifiers};
use folio::theme::{JsonFileStorage, MemoryStorage, ThemeStore};
use folio::ui;
use folio::viewport::Window;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Poll interval while a smooth scroll is animating.
const FRAME: Duration = Duration::from_millis(16);
/// Poll interval while idle.
const IDLE: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A keyboard-driven portfolio page in the terminal", long_about = None)]
struct Args {
    /// Configuration file (defaults to ./folio.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where the theme preference is stored
    #[arg(long, value_name = "PATH")]
    state: Option<PathBuf>,

    /// Keep the theme preference for this session only
    #[arg(long)]
    no_persist: bool,

    /// Write logs to this file (filtered by `RUST_LOG`)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let cfg = Config::load(args.config.as_deref());
    let theme = open_theme(&args);
    let window = Rc::new(Window::new(0, 0));
    let page = PageView::mount(&window, theme, PageSettings::from(&cfg));
    let app = AppState::new(page, cfg.row_height, cfg.scroll_step_rows);

    run_tui(app)
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn open_theme(args: &Args) -> Arc<ThemeStore> {
    if args.no_persist {
        return ThemeStore::init_global(MemoryStorage::new());
    }
    match args.state.clone().or_else(JsonFileStorage::default_path) {
        Some(path) => ThemeStore::init_global(JsonFileStorage::new(path)),
        None => {
            tracing::warn!("no configuration directory; theme will not persist");
            ThemeStore::init_global(MemoryStorage::new())
        }
    }
}

/// Terminals that export `COLORFGBG` with a dark background colour report a dark scheme.
fn system_is_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| value.rsplit(';').next()?.parse::<u8>().ok())
        .is_none_or(|bg| bg < 7 || bg == 8)
}

fn run_tui(mut app: AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    let dark = system_is_dark();
    let window = Rc::clone(app.page.window());

    loop {
        let size = terminal.size()?;
        let (viewport, _) = ui::split(Rect::new(0, 0, size.width, size.height));
        app.resize_terminal(viewport.width, viewport.height);
        app.relayout();

        terminal.draw(|f| ui::draw(f, app, dark))?;

        let timeout = if window.is_animating() { FRAME } else { IDLE };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key) == Flow::Quit {
                    return Ok(());
                }
            }
        }
        window.tick();
    }
}

fn modifiers(key: &KeyEvent) -> Modifiers {
    Modifiers {
        alt: key.modifiers.contains(KeyModifiers::ALT),
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        meta: key.modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Flow {
    app.message = None;

    // Shortcuts registered on the window get the first look at character keys.
    if let KeyCode::Char(c) = key.code {
        let press = app.page.window().key(KeyPress::new(c, modifiers(&key)));
        if press.default_prevented() {
            return Flow::Continue;
        }
    }

    if app.gallery.dialog().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.gallery.close_dialog();
        }
        return Flow::Continue;
    }

    match app.focus {
        Focus::Page => return handle_page_key(app, key),
        Focus::Gallery => match key.code {
            KeyCode::Up => app.gallery.select_prev(),
            KeyCode::Down => app.gallery.select_next(),
            KeyCode::Enter => app.gallery.open_selected(),
            KeyCode::Char('f') => app.gallery.cycle_filter(),
            KeyCode::Char('e') => app.gallery.show_all(),
            KeyCode::Esc => app.release_focus(),
            _ => {}
        },
        Focus::Form(_) => match key.code {
            KeyCode::Char(c) => app.type_char(c),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Tab => app.next_field(),
            KeyCode::Enter => {
                app.submit(&LocalSubmitter);
            }
            KeyCode::Esc => app.release_focus(),
            _ => {}
        },
    }
    Flow::Continue
}

fn handle_page_key(app: &mut AppState, key: KeyEvent) -> Flow {
    match key.code {
        KeyCode::Char('q') => return Flow::Quit,
        KeyCode::Esc => app.page.navigator().close_overlay(),
        KeyCode::Up => app.scroll_step(false),
        KeyCode::Down => app.scroll_step(true),
        KeyCode::PageUp => app.scroll_page(false),
        KeyCode::PageDown => app.scroll_page(true),
        KeyCode::Home => app.page.scroll_to_top(),
        KeyCode::End => app.scroll_to_end(),
        KeyCode::Char('m') => {
            app.page.toggle_menu();
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = "1234".find(c).unwrap_or(0);
            if app.page.navigator().overlay_open() {
                if let Some(item) = HEADER_ITEMS.get(index) {
                    app.page.navigate_to(item.id);
                }
            } else {
                app.bottom_nav(index);
            }
        }
        KeyCode::Tab => app.next_about_tab(),
        KeyCode::Char('g') => app.focus_gallery(),
        KeyCode::Char('i') => app.focus_form(),
        KeyCode::Char('f') => app.gallery.cycle_filter(),
        KeyCode::Char('e') => app.gallery.show_all(),
        _ => {}
    }
    Flow::Continue
}
