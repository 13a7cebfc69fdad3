use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::shared::DisplayState;

const COLS: usize = 4;
const ROWS: usize = 4;

const PAD_LABELS: [&str; 16] = [
    "1", "2", "3", "4",
    "Q", "W", "E", "R",
    "A", "S", "D", "F",
    "Z", "X", "C", "V",
];

pub fn draw_pad_grid(frame: &mut Frame, area: Rect, state: &DisplayState) {
    let row_constraints = [Constraint::Percentage(25); ROWS];
    let col_constraints = [Constraint::Percentage(25); COLS];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);

        for (col_idx, cell_area) in cols.iter().enumerate() {
            let pad_idx = row_idx * COLS + col_idx;
            let pad = &state.pads[pad_idx];

            let style = if state.lit[pad_idx] {
                Style::default().fg(Color::LightMagenta).bg(Color::Magenta)
            } else if pad_idx == state.selected_pad {
                Style::default().fg(Color::Cyan)
            } else if pad.loaded {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let label = if pad.name.is_empty() {
                PAD_LABELS[pad_idx].to_string()
            } else {
                format!("{} {}", PAD_LABELS[pad_idx], pad.name)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(style);
            frame.render_widget(Paragraph::new(label).style(style).block(block), *cell_area);
        }
    }
}
