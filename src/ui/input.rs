use crate::ui::{
    message::AppMessage,
    state::{InputEdit, Scroll},
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// Maps a key press to a message. `Enter` is swallowed while a request
    /// is in flight, the same way a disabled submit button would be.
    pub fn handle_key(key: KeyEvent, is_loading: bool) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(AppMessage::Edit(InputEdit::Clear)),
            (KeyCode::Esc, _) => Some(AppMessage::Quit),
            (KeyCode::Enter, _) if is_loading => None,
            (KeyCode::Enter, _) => Some(AppMessage::Submit),
            (KeyCode::Backspace, _) => Some(AppMessage::Edit(InputEdit::Backspace)),
            (KeyCode::Up, _) => Some(AppMessage::ScrollResults(Scroll::Up)),
            (KeyCode::Down, _) => Some(AppMessage::ScrollResults(Scroll::Down)),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                Some(AppMessage::Edit(InputEdit::Insert(c)))
            }
            _ => None,
        }
    }
}
