//! Keybinding definitions for the TUI.

use crate::forms::FormInput;
use crate::state::Confirmation;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    PrevTab,
    SwitchTab(usize),
    MoveUp,
    MoveDown,
    Open,
    Back,
    Refresh,
    NewItem,
    EditItem,
    DeleteItem,
    Sync,
    ForceSync,
    GenerateDoc,
    AddService,
    ViewDoc,
    OpenDomains,
    OpenAiDocuments,
    PrevPage,
    NextPage,
    Search,
    ScrollUp,
    ScrollDown,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('n') => Some(Action::NewItem),
        KeyCode::Char('e') => Some(Action::EditItem),
        KeyCode::Char('d') => Some(Action::DeleteItem),
        KeyCode::Char('s') => Some(Action::Sync),
        KeyCode::Char('S') => Some(Action::ForceSync),
        KeyCode::Char('g') => Some(Action::GenerateDoc),
        KeyCode::Char('a') => Some(Action::AddService),
        KeyCode::Char('v') => Some(Action::ViewDoc),
        KeyCode::Char('m') => Some(Action::OpenDomains),
        KeyCode::Char('i') => Some(Action::OpenAiDocuments),
        KeyCode::Char('[') => Some(Action::PrevPage),
        KeyCode::Char(']') => Some(Action::NextPage),
        KeyCode::Char('/') => Some(Action::Search),
        KeyCode::Enter => Some(Action::Open),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PrevTab),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::PageDown => Some(Action::ScrollDown),
        KeyCode::Char(c @ '1'..='4') => Some(Action::SwitchTab(c as usize - '1' as usize)),
        _ => None,
    }
}

/// Keys while a form dialog has focus.
pub fn map_form_key(event: KeyEvent) -> Option<FormInput> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('s') => Some(FormInput::Submit),
            KeyCode::Char('c') => Some(FormInput::Cancel),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => Some(FormInput::Cancel),
        KeyCode::Tab => Some(FormInput::NextField),
        KeyCode::BackTab => Some(FormInput::PrevField),
        KeyCode::Enter => Some(FormInput::Enter),
        KeyCode::Backspace => Some(FormInput::Backspace),
        KeyCode::Left => Some(FormInput::Left),
        KeyCode::Right => Some(FormInput::Right),
        KeyCode::Up => Some(FormInput::Up),
        KeyCode::Down => Some(FormInput::Down),
        KeyCode::Home => Some(FormInput::Home),
        KeyCode::End => Some(FormInput::End),
        KeyCode::Char(c) => Some(FormInput::Char(c)),
        _ => None,
    }
}

/// Keys while a confirmation prompt is open.
pub fn map_confirm_key(event: KeyEvent) -> Option<Confirmation> {
    match event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Confirmation::Accepted),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Confirmation::Dismissed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_sync_case_sensitive() {
        assert_eq!(map_key(key(KeyCode::Char('s'))), Some(Action::Sync));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT)),
            Some(Action::ForceSync)
        );
    }

    #[test]
    fn test_tab_digits() {
        assert_eq!(map_key(key(KeyCode::Char('1'))), Some(Action::SwitchTab(0)));
        assert_eq!(map_key(key(KeyCode::Char('4'))), Some(Action::SwitchTab(3)));
        assert_eq!(map_key(key(KeyCode::Char('5'))), None);
    }

    #[test]
    fn test_form_keys() {
        assert_eq!(
            map_form_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(FormInput::Submit)
        );
        assert_eq!(map_form_key(key(KeyCode::Char('q'))), Some(FormInput::Char('q')));
        assert_eq!(map_form_key(key(KeyCode::Esc)), Some(FormInput::Cancel));
        assert_eq!(map_form_key(key(KeyCode::Up)), Some(FormInput::Up));
        assert_eq!(map_form_key(key(KeyCode::End)), Some(FormInput::End));
    }

    #[test]
    fn test_confirm_keys() {
        assert_eq!(map_confirm_key(key(KeyCode::Char('y'))), Some(Confirmation::Accepted));
        assert_eq!(map_confirm_key(key(KeyCode::Esc)), Some(Confirmation::Dismissed));
        assert_eq!(map_confirm_key(key(KeyCode::Char('x'))), None);
    }
}
