use haven_core::{ListingStatus, SortKey, TaskStatus};
use haven_tui::config::{ThemeConfig, TuiConfig};
use haven_tui::data;
use haven_tui::keys::{map_key, Action};
use haven_tui::nav::View;
use haven_tui::persistence::{self, PersistedState};
use haven_tui::theme::{
    listing_status_color, progress_color, task_status_color, HearthglowTheme,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;
use std::io::Write;

fn base_config() -> TuiConfig {
    TuiConfig {
        listings_path: "fixtures/listings.json".into(),
        task_path: Some("fixtures/task.json".into()),
        refresh_interval_ms: 2_000,
        persistence_path: "tmp/haven-tui.json".into(),
        theme: ThemeConfig {
            name: "hearthglow".to_string(),
        },
    }
}

#[test]
fn config_requires_theme_name() {
    let mut config = base_config();
    config.theme = ThemeConfig {
        name: "unknown".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_zero_refresh_interval() {
    let mut config = base_config();
    config.refresh_interval_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn config_parses_from_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
listings_path = "fixtures/listings.json"
task_path = "fixtures/task.json"
refresh_interval_ms = 2000
persistence_path = "tmp/haven-tui.json"

[theme]
name = "hearthglow"
"#
    )
    .unwrap();
    let config = TuiConfig::from_path(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.refresh_interval_ms, 2_000);
}

#[test]
fn fixtures_load_and_validate() {
    let properties = data::load_properties("fixtures/listings.json".as_ref()).unwrap();
    assert!(!properties.is_empty());
    let task = data::load_task(Some("fixtures/task.json".as_ref())).unwrap();
    assert!(task.is_some());
}

#[test]
fn missing_task_path_means_no_task() {
    assert!(data::load_task(None).unwrap().is_none());
}

#[test]
fn malformed_listing_fixture_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"[{{"id": "x", "price": "not a number"}}]"#).unwrap();
    assert!(data::load_properties(file.path()).is_err());
}

#[test]
fn persisted_state_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let state = PersistedState {
        active_view: View::SwarmMonitor,
        sort_key: SortKey::Beds,
    };
    persistence::save(&path, &state).unwrap();
    let loaded = persistence::load(&path).unwrap().unwrap();
    assert_eq!(loaded.active_view, View::SwarmMonitor);
    assert_eq!(loaded.sort_key, SortKey::Beds);
}

#[test]
fn persistence_load_of_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(persistence::load(&dir.path().join("nope.json"))
        .unwrap()
        .is_none());
}

// ============================================================================
// Status-to-color mappings are total and distinct where it matters.
// ============================================================================

#[test]
fn listing_status_colors_distinguish_live_from_sold() {
    let theme = HearthglowTheme::hearthglow();
    let active = listing_status_color(ListingStatus::Active, &theme);
    let sold = listing_status_color(ListingStatus::Sold, &theme);
    assert_ne!(active, sold);
}

#[test]
fn task_status_colors_cover_every_variant() {
    let theme = HearthglowTheme::hearthglow();
    for status in [
        TaskStatus::Queued,
        TaskStatus::Running,
        TaskStatus::Completed,
        TaskStatus::Failed,
    ] {
        // An exhaustive match backs this; the call just pins totality.
        let _ = task_status_color(status, &theme);
    }
    assert_eq!(
        task_status_color(TaskStatus::Completed, &theme),
        theme.success
    );
    assert_eq!(task_status_color(TaskStatus::Failed, &theme), theme.error);
}

#[test]
fn complete_progress_renders_success_color() {
    let theme = HearthglowTheme::hearthglow();
    assert_eq!(progress_color(100, &theme), theme.success);
    assert_ne!(progress_color(0, &theme), theme.success);
}

// ============================================================================
// Keybinding consistency.
// ============================================================================

proptest! {
    #[test]
    fn navigation_keys_consistent(use_vim in prop::bool::ANY) {
        let key = if use_vim {
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)
        } else {
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
        };
        prop_assert!(matches!(map_key(key), Some(Action::MoveDown)));
    }

    #[test]
    fn all_action_keys_mapped(key_char in "[qsftcxrp?/+-]") {
        let c = key_char.chars().next().unwrap();
        let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        prop_assert!(map_key(event).is_some(), "Key '{}' should map to an action", c);
    }

    #[test]
    fn digit_keys_switch_to_real_views(digit in 1usize..=2) {
        let c = char::from(b'0' + digit as u8);
        let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        let action = map_key(event);
        prop_assert!(matches!(action, Some(Action::SwitchView(i)) if i == digit - 1));
        prop_assert!(View::from_index(digit - 1).is_some());
    }
}

#[test]
fn tab_switches_views() {
    let event = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
    assert!(matches!(map_key(event), Some(Action::NextView)));
}

#[test]
fn price_keys_open_the_two_entry_modes() {
    let min = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
    assert!(matches!(map_key(min), Some(Action::OpenMinPrice)));
    let max = KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT);
    assert!(matches!(map_key(max), Some(Action::OpenMaxPrice)));
}

#[test]
fn ctrl_c_quits() {
    let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(matches!(map_key(event), Some(Action::Quit)));
}

#[test]
fn view_cycle_wraps_both_directions() {
    assert_eq!(View::PropertyBrowser.next(), View::SwarmMonitor);
    assert_eq!(View::SwarmMonitor.next(), View::PropertyBrowser);
    assert_eq!(View::PropertyBrowser.previous(), View::SwarmMonitor);
}
