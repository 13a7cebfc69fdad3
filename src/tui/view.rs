use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Color;
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::shared::{DisplayState, ScreenRect};
use crate::wave::render::{draw_empty, draw_loading, draw_waveform};
use crate::wave::session::WaveSession;

use super::canvas::CanvasSurface;
use super::grid::draw_pad_grid;

// Returns where the waveform canvas landed, so mouse events can be mapped
// back onto it.
pub fn render(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DisplayState,
    wave: &WaveSession,
) -> ScreenRect {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),     // waveform panel
            Constraint::Length(12), // pad grid
        ])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.status.clone());
    let inner = block.inner(sections[0]);
    frame.render_widget(block, sections[0]);

    let width = inner.width as f32;
    let height = inner.height as f32;

    let mut surface = CanvasSurface::new(height);
    match wave.peaks() {
        Some(peaks) => {
            surface.pen = Color::Magenta;
            draw_waveform(&mut surface, width, height, peaks);
            surface.pen = Color::Yellow;
            wave.bars.draw(&mut surface);
        }
        None if wave.is_pending() => {
            surface.pen = Color::DarkGray;
            draw_loading(&mut surface, width, height);
        }
        None => {
            surface.pen = Color::DarkGray;
            draw_empty(&mut surface, width, height);
        }
    }

    let canvas = Canvas::default()
        .x_bounds([0.0, width as f64])
        .y_bounds([0.0, height as f64])
        .paint(|ctx| surface.paint(ctx));
    frame.render_widget(canvas, inner);

    draw_pad_grid(frame, sections[1], state);

    ScreenRect {
        x: inner.x,
        y: inner.y,
        width: inner.width,
        height: inner.height,
    }
}
