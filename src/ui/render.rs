use ratatui::buffer::Buffer as CellBuffer;
use ratatui::prelude::*;
use ratatui::widgets::Clear;

use crate::app::Model;

use super::{FOOTER_ROWS, status};

/// Render the complete UI.
///
/// Every visible buffer character is written to its own grid cell, the
/// terminal cursor is placed on the edit position, and the footer is
/// redrawn. The frame is presented when `Terminal::draw` returns.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let footer_rows = FOOTER_ROWS.min(area.height);
    let text_area = Rect {
        height: area.height - footer_rows,
        ..area
    };
    let toast_area = Rect {
        y: area.y + area.height.saturating_sub(2),
        height: u16::from(area.height >= 2),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };

    frame.render_widget(Clear, text_area);
    draw_lines(model, frame.buffer_mut(), text_area);

    status::render_toast_bar(model, frame, toast_area);
    status::render_status_bar(model, frame, status_area);

    if let Some((x, y)) = model
        .viewport
        .screen_position(model.cursor.row, model.cursor.col)
        && x < text_area.width
        && y < text_area.height
    {
        frame.set_cursor_position((text_area.x + x, text_area.y + y));
    }
}

fn draw_lines(model: &Model, cells: &mut CellBuffer, area: Rect) {
    let rows = model.viewport.visible_rows(model.buffer.line_count());
    let col_offset = model.viewport.col_offset();

    for (y, row) in (area.top()..area.bottom()).zip(rows) {
        let Some(line) = model.buffer.line(row) else {
            break;
        };
        let visible = line.chars().iter().skip(col_offset);
        for (x, &ch) in (area.left()..area.right()).zip(visible) {
            if let Some(cell) = cells.cell_mut((x, y)) {
                cell.set_char(ch);
            }
        }
    }
}
