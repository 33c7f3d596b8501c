mod common;

use common::base_config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use koala_core::WarehouseStatus;
use koala_tui::config::{ThemeConfig, MAX_PAGE_SIZE};
use koala_tui::forms::FormInput;
use koala_tui::keys::{map_form_key, map_key, Action};
use koala_tui::nav::{Route, Tab};
use koala_tui::theme::{warehouse_status_color, SynthBruteTheme};
use proptest::prelude::*;

#[test]
fn config_requires_known_theme() {
    let mut config = base_config("http://localhost:18091");
    config.theme = ThemeConfig {
        name: "unknown".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_zero_timeout() {
    let mut config = base_config("http://localhost:18091");
    config.request_timeout_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn every_tab_route_maps_back_to_its_tab() {
    for tab in Tab::all() {
        assert_eq!(tab.route().tab(), *tab);
        assert_eq!(Route::parse(&tab.route().to_path()), tab.route());
    }
}

fn id_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ?#%/._-]{1,12}"
}

fn doc_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9 ?#%._-]{1,8}", 0..4).prop_map(|segments| segments.join("/"))
}

fn route_strategy() -> impl Strategy<Value = Route> {
    prop_oneof![
        Just(Route::Home),
        Just(Route::Warehouses),
        Just(Route::Agents),
        Just(Route::GlobalDomains),
        id_strategy().prop_map(|id| Route::Repository { id }),
        id_strategy().prop_map(|warehouse_id| Route::Domains { warehouse_id }),
        id_strategy().prop_map(|warehouse_id| Route::AiDocuments { warehouse_id }),
        id_strategy().prop_map(|id| Route::AiDocument { id }),
        (id_strategy(), doc_path_strategy())
            .prop_map(|(warehouse_id, path)| Route::Document { warehouse_id, path }),
    ]
}

proptest! {
    #[test]
    fn route_paths_round_trip(route in route_strategy()) {
        let path = route.to_path();
        prop_assert!(path.starts_with('/'));
        prop_assert_eq!(Route::parse(&path), route);
    }

    #[test]
    fn parse_never_panics(path in ".{0,40}") {
        let _ = Route::parse(&path);
    }

    #[test]
    fn digit_keys_switch_tabs(index in 0usize..4) {
        let digit = char::from_digit(index as u32 + 1, 10).unwrap();
        let action = map_key(KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE));
        prop_assert_eq!(action, Some(Action::SwitchTab(index)));
        prop_assert!(Tab::from_index(index).is_some());
    }

    #[test]
    fn form_keys_type_printable_chars(c in "[a-zA-Z0-9 /*._-]") {
        let c = c.chars().next().unwrap();
        let input = map_form_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        prop_assert_eq!(input, Some(FormInput::Char(c)));
    }

    #[test]
    fn page_size_bounds(size in 0u32..300) {
        let mut config = base_config("https://wiki.example.com");
        config.page_size = size;
        let valid = (1..=MAX_PAGE_SIZE).contains(&size);
        prop_assert_eq!(config.validate().is_ok(), valid);
    }

    #[test]
    fn unknown_statuses_render_dim(raw in "[a-z]{3,10}") {
        let theme = SynthBruteTheme::synthbrute();
        let status = WarehouseStatus::from(format!("x-{raw}"));
        prop_assert_eq!(warehouse_status_color(&status, &theme), theme.text_dim);
    }
}
