use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use tabcat::{
    app::{App, InputMode},
    config::{self, Config},
    fetch,
    types::{AppEvent, SortField},
    ui,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (safe to ignore if not found)
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cfg = config::load().context("Failed to load configuration")?;

    // terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // app + channels
    let (tx, rx) = unbounded_channel::<AppEvent>();
    let mut app = App::new(cfg.modes(), cfg.theme.colors());

    let result = run_loop(&mut app, &mut terminal, &cfg, tx, rx).await;

    // cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    result
}

async fn run_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: &Config,
    tx: UnboundedSender<AppEvent>,
    mut rx: UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let mut last_frame = Instant::now();
    loop {
        // frame budget (coalesced renders)
        let frame_ms = 1000u32.saturating_div(cfg.render_fps) as u64;
        let budget = Duration::from_millis(frame_ms.max(1));
        let wait = budget.saturating_sub(last_frame.elapsed());

        // input or fetch-completion events
        if event::poll(wait)? {
            if let Event::Key(k) = event::read()? {
                if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat {
                    handle_key(app, k, cfg, &tx);
                }
            }
        }
        while let Ok(ev) = rx.try_recv() {
            app.on_event(ev);
        }

        if last_frame.elapsed() >= budget {
            terminal.draw(|f| ui::draw(f, app))?;
            last_frame = Instant::now();
        }
        if app.quit_flag() {
            break;
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, k: KeyEvent, cfg: &Config, tx: &UnboundedSender<AppEvent>) {
    match app.input_mode() {
        InputMode::ModeSelect => match (k.code, k.modifiers) {
            (KeyCode::Up, _) => app.mode_up(),
            (KeyCode::Down, _) => app.mode_down(),
            (KeyCode::Enter, _) => {
                // Mode chosen: enter loading and start the single fetch
                if let Some(url) = app.select_mode() {
                    fetch::spawn_fetch(url, cfg.fetch_timeout_ms, tx.clone());
                }
            }
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                app.on_event(AppEvent::Quit);
            }
            _ => {}
        },

        InputMode::Search => match k.code {
            KeyCode::Char(c) => app.search_add_char(c),
            KeyCode::Backspace => app.search_backspace(),
            KeyCode::Enter => app.end_search(),
            KeyCode::Esc => app.clear_search(),
            _ => {}
        },

        InputMode::Form => match (k.code, k.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => app.form_mut().reset(),
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => app.on_event(AppEvent::Quit),
            (KeyCode::Char(c), _) => app.form_mut().input_char(c),
            (KeyCode::Backspace, _) => app.form_mut().backspace(),
            (KeyCode::Tab, _) | (KeyCode::Down, _) => app.form_mut().next_field(),
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => app.form_mut().prev_field(),
            (KeyCode::Enter, _) => app.submit_form(),
            (KeyCode::Esc, _) => app.leave_form(),
            _ => {}
        },

        InputMode::Normal => match (k.code, k.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                app.on_event(AppEvent::Quit);
            }
            // Everything below operates on loaded data
            _ if app.is_loading() => {}
            (KeyCode::Up, _) => app.cursor_up(),
            (KeyCode::Down, _) => app.cursor_down(),
            (KeyCode::Left, _) => app.prev_page(),
            (KeyCode::Right, _) => app.next_page(),
            (KeyCode::Enter, _) => app.select_row(),
            (KeyCode::Char('/'), _) => app.start_search(),
            (KeyCode::Char('a'), _) => app.show_form(),
            (KeyCode::Char(c), _) if ('1'..='5').contains(&c) => {
                let idx = (c as usize) - ('1' as usize);
                app.on_sort(SortField::ALL[idx]);
            }
            _ => {}
        },
    }
}
