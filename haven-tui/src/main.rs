//! HAVEN TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use haven_tui::config::TuiConfig;
use haven_tui::data;
use haven_tui::error::TuiError;
use haven_tui::events::TuiEvent;
use haven_tui::keys::{map_key, Action};
use haven_tui::notifications::NotificationLevel;
use haven_tui::persistence::{self, PersistedState};
use haven_tui::state::{App, Modal, PriceField};
use haven_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    let properties = data::load_properties(&config.listings_path)?;
    let task = data::load_task(config.task_path.as_deref())?;

    let mut app = App::new(config, properties, task);
    if let Ok(Some(state)) = persistence::load(&app.config.persistence_path) {
        app.active_view = state.active_view;
        app.sort_key = state.sort_key;
        app.recompute();
    }

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.refresh_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event) {
                    break;
                }
            }
        }
    }

    let persisted = PersistedState {
        active_view: app.active_view,
        sort_key: app.sort_key,
    };
    let _ = persistence::save(&app.config.persistence_path, &persisted);

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn handle_event(app: &mut App, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Input(key) => {
            // Search entry mode captures raw characters before the keymap.
            if app.search_input.is_some() {
                match key.code {
                    KeyCode::Char(c) => app.push_search_char(c),
                    KeyCode::Backspace => app.pop_search_char(),
                    KeyCode::Enter => app.commit_search(),
                    KeyCode::Esc => app.cancel_search(),
                    _ => {}
                }
                return false;
            }
            // Same shape for price bound entry.
            if app.price_input.is_some() {
                match key.code {
                    KeyCode::Char(c) => app.push_price_char(c),
                    KeyCode::Backspace => app.pop_price_char(),
                    KeyCode::Enter => app.commit_price_entry(),
                    KeyCode::Esc => app.cancel_price_entry(),
                    _ => {}
                }
                return false;
            }
            if let Some(action) = map_key(key) {
                return handle_action(app, action);
            }
        }
        TuiEvent::Resize { .. } | TuiEvent::Tick => {}
    }
    false
}

fn handle_action(app: &mut App, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::NextView => app.active_view = app.active_view.next(),
        Action::PrevView => app.active_view = app.active_view.previous(),
        Action::SwitchView(index) => {
            if let Some(view) = haven_tui::nav::View::from_index(index) {
                app.active_view = view;
            }
        }
        Action::MoveDown => app.select_next(),
        Action::MoveUp => app.select_previous(),
        Action::CycleSort => app.cycle_sort(),
        Action::CycleStatus => app.cycle_status(),
        Action::CycleType => app.cycle_type(),
        Action::CycleCity => app.cycle_city(),
        Action::RaiseMinBeds => app.raise_min_beds(),
        Action::LowerMinBeds => app.lower_min_beds(),
        Action::ClearFilters => app.clear_filters(),
        Action::OpenSearch => app.open_search(),
        Action::OpenMinPrice => app.open_price_entry(PriceField::Min),
        Action::OpenMaxPrice => app.open_price_entry(PriceField::Max),
        Action::OpenHelp => {
            app.modal = Some(Modal {
                title: "Keybindings".to_string(),
                message: "j/k or arrows move • Tab switches views • / opens search • \
                          s cycles sort • f/t/c cycle status/type/city filters • \
                          p/P set min/max price (blank or invalid clears) • \
                          +/- adjust minimum beds • x clears filters • r reloads \
                          snapshots • q quits. Esc closes this help."
                    .to_string(),
            });
        }
        Action::Refresh => refresh_snapshots(app),
        Action::Confirm => {}
        Action::Cancel => app.modal = None,
    }
    false
}

fn refresh_snapshots(app: &mut App) {
    let properties = data::load_properties(&app.config.listings_path);
    let task = data::load_task(app.config.task_path.as_deref());
    match (properties, task) {
        (Ok(properties), Ok(task)) => {
            app.replace_data(properties, task);
            app.notify(NotificationLevel::Success, "Snapshots reloaded.");
        }
        (Err(err), _) | (_, Err(err)) => {
            app.notify(NotificationLevel::Error, format!("Reload failed: {}", err));
        }
    }
}
