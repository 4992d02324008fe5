// Terminal binary for jsonscope

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};

use jsonscope::{
    app::{App, InputMode},
    config,
    history::HistoryStore,
    ui,
};

fn main() -> Result<()> {
    env_logger::init();

    let cfg = config::load().context("Failed to load configuration")?;

    let mut app = App::new(cfg.theme, HistoryStore::new(cfg.history_path.clone()));
    if let Some(file) = &cfg.file {
        app.load_file(file)?;
    }

    // terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // main loop
    let result = run_loop(&mut app, &mut terminal);

    // cleanup runs even when the loop errored
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    result
}

fn run_loop(app: &mut App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    // frame budget (coalesced renders, ~30 fps)
    const FRAME: Duration = Duration::from_millis(33);
    let mut last_frame = Instant::now();
    // force an immediate first draw
    let mut dirty = true;

    loop {
        let wait = FRAME.saturating_sub(last_frame.elapsed());
        if event::poll(wait)? {
            match event::read()? {
                Event::Key(k) => {
                    if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat {
                        handle_key(app, k);
                        dirty = true;
                    }
                }
                Event::Paste(text) => {
                    app.paste(&text);
                    dirty = true;
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }
        if dirty || last_frame.elapsed() >= FRAME {
            terminal.draw(|f| ui::draw(f, app))?;
            last_frame = Instant::now();
            dirty = false;
        }
        if app.quit_flag() {
            break;
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, k: KeyEvent) {
    // The blocking error modal swallows the next key, whatever it is
    if app.modal_error().is_some() {
        app.dismiss_modal();
        return;
    }

    // Clear-history confirmation: y confirms, anything else cancels
    if app.input_mode() == InputMode::ConfirmClear {
        match k.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_clear_history(),
            _ => app.cancel_clear_history(),
        }
        return;
    }

    // History overlay mode
    if app.input_mode() == InputMode::History {
        match (k.code, k.modifiers) {
            (KeyCode::Up, _) => app.history_up(),
            (KeyCode::Down, _) => app.history_down(),
            (KeyCode::Enter, _) => app.restore_selected(),
            (KeyCode::Char('x'), _) => app.request_clear_history(),
            (KeyCode::Esc, _) | (KeyCode::Char('o'), KeyModifiers::CONTROL) => app.close_history(),
            (KeyCode::Char('q'), KeyModifiers::CONTROL)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => app.quit(),
            _ => {}
        }
        return;
    }

    // Normal mode: global commands first, the rest flows into the focused pane
    match (k.code, k.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::CONTROL)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => app.quit(),

        (KeyCode::Tab, _) => app.next_pane(),
        (KeyCode::BackTab, _) => app.prev_pane(),

        (KeyCode::Char('k'), KeyModifiers::CONTROL) => app.validate(),
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => app.prettify(),
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => app.minify(),
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => app.copy(),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => app.download(),
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => app.build_tree(),
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => app.toggle_theme(),
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => app.open_history(),

        _ => {
            if app.pane() == 0 {
                // Editor pane: the widget handles editing keys itself
                app.editor_input(k);
            } else {
                // Tree pane navigation
                match k.code {
                    KeyCode::Up => app.tree_up(),
                    KeyCode::Down => app.tree_down(),
                    KeyCode::Char(' ') => app.tree_toggle(),
                    KeyCode::Enter => app.tree_activate(),
                    KeyCode::Char('q') => app.quit(),
                    _ => {}
                }
            }
        }
    }
}
