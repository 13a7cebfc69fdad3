// The 2-d surface the waveform bits draw on. Keeps the render code off any
// concrete toolkit; the tui provides a braille-canvas impl and the tests a
// recording one. Coordinates are y-down, like every drawing api we care
// about.
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32);
    fn fill_polygon(&mut self, points: &[(f32, f32)]);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
}

#[cfg(test)]
pub mod recording {
    use super::Surface;

    // test double that just remembers what was asked of it
    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Clear(f32, f32, f32, f32),
        FillRect(f32, f32, f32, f32),
        Line(f32, f32, f32, f32),
        Polygon(Vec<(f32, f32)>),
        Save,
        Restore,
        Translate(f32, f32),
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.ops.push(Op::Clear(x, y, w, h));
        }
        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.ops.push(Op::FillRect(x, y, w, h));
        }
        fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
            self.ops.push(Op::Line(x0, y0, x1, y1));
        }
        fn fill_polygon(&mut self, points: &[(f32, f32)]) {
            self.ops.push(Op::Polygon(points.to_vec()));
        }
        fn save(&mut self) {
            self.ops.push(Op::Save);
        }
        fn restore(&mut self) {
            self.ops.push(Op::Restore);
        }
        fn translate(&mut self, dx: f32, dy: f32) {
            self.ops.push(Op::Translate(dx, dy));
        }
    }
}
