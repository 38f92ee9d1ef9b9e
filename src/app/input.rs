use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use crate::app::{App, Message, Model};
use crate::editor::Direction;

impl App {
    pub(super) fn handle_event(event: &Event) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            // Navigation
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),

            // Editing
            KeyCode::Backspace => Some(Message::DeleteBackward),
            KeyCode::Char('h') if ctrl => Some(Message::DeleteBackward),
            KeyCode::Enter => Some(Message::Newline),

            // Mode. Most terminals report Ctrl+I as Tab.
            KeyCode::Tab => Some(Message::EnterInsertMode),
            KeyCode::Char('i') if ctrl => Some(Message::EnterInsertMode),
            KeyCode::Esc => Some(Message::EnterNavigateMode),

            // File
            KeyCode::Char('s') if ctrl => Some(Message::Save),

            // Screen
            KeyCode::Char('l') if ctrl => Some(Message::Redraw),

            // Quit
            KeyCode::Char('c' | 'q') if ctrl => Some(Message::Quit),

            KeyCode::Char(c) if !ctrl && !alt && !c.is_control() => Some(Message::InsertChar(c)),

            _ => None,
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
