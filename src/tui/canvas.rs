// Surface impl that buffers draw ops and replays them into a ratatui
// braille canvas. The widget starts from a blank frame every draw, so
// clear_rect has nothing to do here; y runs downward on the surface and
// upward on the canvas, so paint() flips it.

use ratatui::style::Color;
use ratatui::widgets::canvas::{Context, Line};

use crate::wave::surface::Surface;

// braille gives 4 sub-rows per cell; fills scan at that pitch so shapes
// come out solid instead of striped
const FILL_STEP: f32 = 0.25;

struct StrokedLine {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    color: Color,
}

pub struct CanvasSurface {
    pub pen: Color,
    height: f32,
    lines: Vec<StrokedLine>,
    offset: (f32, f32),
    stack: Vec<(f32, f32)>,
}

impl CanvasSurface {
    pub fn new(height: f32) -> Self {
        Self {
            pen: Color::Reset,
            height,
            lines: Vec::new(),
            offset: (0.0, 0.0),
            stack: Vec::new(),
        }
    }

    pub fn paint(&self, ctx: &mut Context) {
        for l in &self.lines {
            ctx.draw(&Line {
                x1: l.x0 as f64,
                y1: (self.height - l.y0) as f64,
                x2: l.x1 as f64,
                y2: (self.height - l.y1) as f64,
                color: l.color,
            });
        }
    }

    fn push_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        let (dx, dy) = self.offset;
        self.lines.push(StrokedLine {
            x0: x0 + dx,
            y0: y0 + dy,
            x1: x1 + dx,
            y1: y1 + dy,
            color: self.pen,
        });
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let mut row = y;
        while row <= y + h {
            self.push_line(x, row, x + w, row);
            row += FILL_STEP;
        }
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.push_line(x0, y0, x1, y1);
    }

    // even-odd scanline fill
    fn fill_polygon(&mut self, points: &[(f32, f32)]) {
        if points.len() < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

        let mut row = min_y;
        let mut crossings: Vec<f32> = Vec::new();
        while row <= max_y {
            crossings.clear();
            for i in 0..points.len() {
                let (x0, y0) = points[i];
                let (x1, y1) = points[(i + 1) % points.len()];
                if (y0 <= row && y1 > row) || (y1 <= row && y0 > row) {
                    let t = (row - y0) / (y1 - y0);
                    crossings.push(x0 + t * (x1 - x0));
                }
            }
            crossings.sort_by(f32::total_cmp);
            for pair in crossings.chunks_exact(2) {
                self.push_line(pair[0], row, pair[1], row);
            }
            row += FILL_STEP;
        }
    }

    fn save(&mut self) {
        self.stack.push(self.offset);
    }

    fn restore(&mut self) {
        self.offset = self.stack.pop().unwrap_or((0.0, 0.0));
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset.0 += dx;
        self.offset.1 += dy;
    }
}
