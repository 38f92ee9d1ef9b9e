use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};
use crate::editor::Mode;

use super::{APP_TITLE, STATUS_LEFT_PADDING};

/// Text of the status line: mode label first, then file and position.
pub fn status_line(model: &Model) -> String {
    let modified = if model.modified { " [modified]" } else { "" };
    format!(
        "{APP_TITLE} - {}  {}{}  Ln {}, Col {}",
        model.mode.label(),
        model.display_name(),
        modified,
        model.cursor.row + 1,
        model.cursor.col + 1
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let style = match model.mode {
        Mode::Insert => Style::default().bg(Color::Magenta).fg(Color::White),
        Mode::Navigate => Style::default().bg(Color::DarkGray).fg(Color::White),
    };
    let padding = " ".repeat(usize::from(STATUS_LEFT_PADDING));
    let status_bar = Paragraph::new(format!("{padding}{}", status_line(model))).style(style);

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
