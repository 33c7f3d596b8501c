//! Routes terminal events to the app according to the current input mode.
//!
//! Handling is split in two. [`handle_event`] applies the key at once and
//! flags the page as busy; whatever needs the network comes back as a
//! [`Work`] item. The event loop draws the busy state before awaiting
//! [`run`].

use crate::events::TuiEvent;
use crate::keys::{map_confirm_key, map_form_key, map_key, Action};
use crate::nav::{Route, Tab};
use crate::state::{App, Confirmation, InputMode, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Lines moved by PageUp/PageDown.
pub const SCROLL_PAGE: u16 = 10;

/// Request left pending after a key has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Work {
    /// Fetch the data of the current page.
    Load,
    /// Page command that talks to the backend.
    Command(Action),
    SubmitForm,
    Resolve(Confirmation),
}

pub fn handle_event(app: &mut App, event: TuiEvent) -> Option<Work> {
    match event {
        TuiEvent::Input(key) => handle_key(app, key),
        TuiEvent::Tick | TuiEvent::Resize { .. } => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Work> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match app.input_mode() {
        InputMode::Confirm => {
            let confirmation = map_confirm_key(key)?;
            if confirmation == Confirmation::Accepted {
                app.page.mark_loading();
            }
            Some(Work::Resolve(confirmation))
        }
        InputMode::Form => {
            let input = map_form_key(key)?;
            if app.handle_form_input(input) {
                app.page.mark_loading();
                Some(Work::SubmitForm)
            } else {
                None
            }
        }
        InputMode::Overlay => {
            handle_overlay_key(app, key);
            None
        }
        InputMode::Normal => handle_action(app, map_key(key)?),
    }
}

/// Await the pending request, then clear the busy flags it raised.
pub async fn run(app: &mut App, work: Work) {
    match work {
        Work::Load => app.load_page().await,
        Work::Command(action) => run_command(app, action).await,
        Work::SubmitForm => app.submit_form().await,
        Work::Resolve(confirmation) => app.resolve_confirmation(confirmation).await,
    }
    app.page.finish_busy();
}

fn handle_overlay_key(app: &mut App, key: KeyEvent) {
    let Some(overlay) = app.page.overlay_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('v') => {
            app.page.close_dialog()
        }
        KeyCode::Down | KeyCode::Char('j') => overlay.scroll = overlay.scroll.saturating_add(1),
        KeyCode::Up | KeyCode::Char('k') => overlay.scroll = overlay.scroll.saturating_sub(1),
        KeyCode::PageDown => overlay.scroll = overlay.scroll.saturating_add(SCROLL_PAGE),
        KeyCode::PageUp => overlay.scroll = overlay.scroll.saturating_sub(SCROLL_PAGE),
        _ => {}
    }
}

pub fn handle_action(app: &mut App, action: Action) -> Option<Work> {
    match action {
        Action::Quit => {
            app.should_quit = true;
            None
        }
        Action::NextTab => {
            let route = app.route.tab().next().route();
            navigate(app, route)
        }
        Action::PrevTab => {
            let route = app.route.tab().previous().route();
            navigate(app, route)
        }
        Action::SwitchTab(index) => navigate(app, Tab::from_index(index)?.route()),
        Action::MoveDown => {
            app.page.select_next();
            None
        }
        Action::MoveUp => {
            app.page.select_previous();
            None
        }
        Action::ScrollDown => {
            app.page.scroll_down(SCROLL_PAGE);
            None
        }
        Action::ScrollUp => {
            app.page.scroll_up(SCROLL_PAGE);
            None
        }
        Action::Refresh => {
            app.page.mark_loading();
            Some(Work::Load)
        }
        Action::Back => app.back().then_some(Work::Load),
        Action::Open => match open_target(&mut app.page) {
            Some(route) => navigate(app, route),
            None if matches!(app.page, Page::Domains(_) | Page::GlobalDomains(_)) => {
                page_action(app, Action::ViewDoc)
            }
            None => None,
        },
        Action::OpenDomains => {
            let warehouse_id = current_warehouse_id(&app.page)?;
            navigate(app, Route::Domains { warehouse_id })
        }
        Action::OpenAiDocuments => {
            let warehouse_id = current_warehouse_id(&app.page)?;
            navigate(app, Route::AiDocuments { warehouse_id })
        }
        other => page_action(app, other),
    }
}

fn navigate(app: &mut App, route: Route) -> Option<Work> {
    app.navigate(route);
    Some(Work::Load)
}

/// Where Enter leads from the selected row, if anywhere.
fn open_target(page: &mut Page) -> Option<Route> {
    match page {
        Page::Home => Some(Route::Warehouses),
        Page::Warehouses(page) => page.selected_warehouse().map(|w| Route::Repository {
            id: w.id.clone(),
        }),
        Page::Repository(page) => page.open_selected(),
        Page::AiDocuments(page) => page.open_selected(),
        _ => None,
    }
}

fn current_warehouse_id(page: &Page) -> Option<String> {
    match page {
        Page::Warehouses(page) => page.selected_warehouse().map(|w| w.id.clone()),
        Page::Repository(page) => Some(page.warehouse_id.clone()),
        Page::Domains(page) => Some(page.warehouse_id.clone()),
        Page::AiDocuments(page) => Some(page.warehouse_id.clone()),
        Page::Document(page) => Some(page.warehouse_id.clone()),
        _ => None,
    }
}

/// Actions whose meaning depends on the active page. Dialogs open at once;
/// backend commands flag the page and come back as [`Work::Command`].
fn page_action(app: &mut App, action: Action) -> Option<Work> {
    let App {
        page,
        notifications: notes,
        ..
    } = app;
    let prompt = match (page, action) {
        (Page::Warehouses(page), Action::NewItem) => {
            page.open_create();
            None
        }
        (Page::Warehouses(page), Action::Search) => {
            page.open_search();
            None
        }
        (Page::Warehouses(page), Action::Sync | Action::ForceSync) => {
            page.selected.as_ref()?;
            page.loading = true;
            return Some(Work::Command(action));
        }
        (Page::Warehouses(page), Action::NextPage) => {
            if page.query.page >= page.total_pages() {
                return None;
            }
            page.loading = true;
            return Some(Work::Command(action));
        }
        (Page::Warehouses(page), Action::PrevPage) => {
            if page.query.page <= 1 {
                return None;
            }
            page.loading = true;
            return Some(Work::Command(action));
        }
        (Page::Warehouses(page), Action::DeleteItem) => page.delete_prompt(),
        (Page::Domains(page), action) => match action {
            Action::NewItem => {
                page.open_create_domain();
                None
            }
            Action::EditItem => {
                page.open_edit();
                None
            }
            Action::AddService => {
                page.open_add_service();
                None
            }
            Action::ViewDoc => {
                page.open_document();
                None
            }
            Action::GenerateDoc => return page.begin_generate().then_some(Work::Command(action)),
            Action::DeleteItem => page.delete_prompt(),
            _ => None,
        },
        (Page::GlobalDomains(page), action) => match action {
            Action::NewItem => {
                page.open_create_domain();
                None
            }
            Action::EditItem => {
                page.open_edit();
                None
            }
            Action::AddService => {
                page.open_add_service(notes);
                None
            }
            Action::ViewDoc => {
                page.open_document();
                None
            }
            Action::GenerateDoc => return page.begin_generate().then_some(Work::Command(action)),
            Action::DeleteItem => page.delete_prompt(),
            _ => None,
        },
        _ => None,
    };
    if let Some(prompt) = prompt {
        app.request_confirmation(prompt);
    }
    None
}

async fn run_command(app: &mut App, action: Action) {
    let App {
        page,
        api,
        notifications: notes,
        ..
    } = app;
    match (page, action) {
        (Page::Warehouses(page), Action::Sync | Action::ForceSync) => {
            if let Some(id) = page.selected.clone() {
                page.sync(api, notes, &id, action == Action::ForceSync).await;
            }
        }
        (Page::Warehouses(page), Action::NextPage) => {
            page.next_page(api, notes).await;
        }
        (Page::Warehouses(page), Action::PrevPage) => {
            page.prev_page(api, notes).await;
        }
        (Page::Domains(page), Action::GenerateDoc) => page.generate_selected(api, notes).await,
        (Page::GlobalDomains(page), Action::GenerateDoc) => {
            page.generate_selected(api, notes).await
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::ApiClient;
    use crate::config::TuiConfig;
    use crate::state::{ConfirmPrompt, PendingAction};
    use crate::views::render_view;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn offline_app() -> App {
        let config = TuiConfig::from_toml(
            r#"
api_base_url = "http://127.0.0.1:9"
request_timeout_ms = 500
page_size = 10
persistence_path = "/tmp/koala-tui-test/state.json"
error_log_path = "/tmp/koala-tui-test/koala-tui.log"

[theme]
name = "synthbrute"
"#,
        )
        .unwrap();
        let api = ApiClient::new(&config).unwrap();
        App::new(config, api)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn header_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| render_view(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..buffer.area.width)
            .map(|x| buffer.get(x, 0).symbol().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_quit_key() {
        let mut app = offline_app();
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('q'))), None);
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_page_draws_as_loading_until_the_request_settles() {
        let mut app = offline_app();
        let work = handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(work, Some(Work::Load));
        assert_eq!(app.route, Route::Warehouses);
        assert!(app.page.is_loading());
        assert!(header_text(&app).contains("/warehouses | loading"));

        run(&mut app, Work::Load).await;
        assert!(!app.page.is_loading());
        assert!(!header_text(&app).contains("loading"));
        assert_eq!(app.notifications.latest().unwrap().message, crate::messages::LOAD_FAILED);
    }

    #[tokio::test]
    async fn test_dismissed_prompt_is_silent() {
        let mut app = offline_app();
        app.request_confirmation(ConfirmPrompt {
            message: crate::messages::CONFIRM_DELETE_WAREHOUSE,
            action: PendingAction::DeleteWarehouse {
                id: "w1".to_string(),
            },
        });
        assert_eq!(app.input_mode(), InputMode::Confirm);
        // q is not an answer; the prompt stays and the app keeps running
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('q'))), None);
        assert!(app.confirm.is_some());
        assert!(!app.should_quit);

        let work = handle_key(&mut app, press(KeyCode::Char('n')));
        assert_eq!(work, Some(Work::Resolve(Confirmation::Dismissed)));
        assert!(!app.page.is_loading());
        run(&mut app, Work::Resolve(Confirmation::Dismissed)).await;
        assert!(app.confirm.is_none());
        assert!(app.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_back_on_empty_history_stays_home() {
        let mut app = offline_app();
        assert_eq!(handle_action(&mut app, Action::Back), None);
        assert_eq!(app.route, Route::Home);
    }

    #[tokio::test]
    async fn test_paging_past_the_ends_sends_nothing() {
        let mut app = offline_app();
        app.navigate(Route::Warehouses);
        app.page.finish_busy();
        assert_eq!(handle_action(&mut app, Action::PrevPage), None);
        assert_eq!(handle_action(&mut app, Action::NextPage), None);
        assert_eq!(handle_action(&mut app, Action::Sync), None);
        assert!(!app.page.is_loading());
    }

    #[test]
    fn test_home_opens_warehouses() {
        let mut page = Page::Home;
        assert_eq!(open_target(&mut page), Some(Route::Warehouses));
        assert_eq!(current_warehouse_id(&page), None);
    }
}
