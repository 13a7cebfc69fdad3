// The two draggable trim handles that sit over the waveform.
//
// Hit radius and crossing behavior are deliberately single, named constants:
// grab feel and what happens when one handle is shoved past the other are
// tuning decisions, and everything downstream only relies on the pair being
// ordered once the pointer lets go.

use super::surface::Surface;
use crate::pads::PadStore;

pub const TRIM_HIT_RADIUS: f32 = 25.0;
pub const TRIM_CROSSING: CrossingPolicy = CrossingPolicy::ClampToCounterpart;

// height of the little grab handle drawn on the center line
const HANDLE_SIZE: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossingPolicy {
    // a dragged bar stops dead at its counterpart
    ClampToCounterpart,
    // a dragged bar may pass its counterpart; the pair trades roles when
    // the pointer lets go
    SwapOnRelease,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TrimBar {
    pub x: f32,
    pub selected: bool, // pointer is close enough to grab
    pub dragged: bool,  // pointer-down landed while selected
}

#[derive(Clone, Debug)]
pub struct TrimBars {
    pub left: TrimBar,
    pub right: TrimBar,
    pub policy: CrossingPolicy,
    width: f32,
    height: f32,
}

impl TrimBars {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: TrimBar::default(),
            right: TrimBar {
                x: width,
                ..TrimBar::default()
            },
            policy: TRIM_CROSSING,
            width,
            height,
        }
    }

    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        // keep the bars' relative positions when the surface resizes
        if self.width > 0.0 && width != self.width {
            let sx = width / self.width;
            self.left.x *= sx;
            self.right.x *= sx;
        }
        self.width = width;
        self.height = height;
    }

    // reposition from a pad's trim window; called on every pad switch
    pub fn sync_to_window(&mut self, trim_start: f32, trim_end: f32, duration: f32) {
        self.left.x = time_to_pixel(trim_start, duration, self.width);
        self.right.x = time_to_pixel(trim_end, duration, self.width);
        self.left.selected = false;
        self.left.dragged = false;
        self.right.selected = false;
        self.right.dragged = false;
    }

    // Hover pass. Selection is winner-take-all so two nearby handles can't
    // both arm at once; while a drag is live this just feeds it.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.left.dragged || self.right.dragged {
            self.drag_to(x);
            return;
        }
        let dist_left = self.distance_to_bar(self.left.x, x, y);
        let dist_right = self.distance_to_bar(self.right.x, x, y);
        let pick_left = dist_left <= dist_right && dist_left <= TRIM_HIT_RADIUS;
        let pick_right = !pick_left && dist_right <= TRIM_HIT_RADIUS;
        self.left.selected = pick_left;
        self.right.selected = pick_right;
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        // a click can land without a prior move event
        self.pointer_moved(x, y);
        if self.left.selected {
            self.left.dragged = true;
        } else if self.right.selected {
            self.right.dragged = true;
        }
    }

    fn drag_to(&mut self, x: f32) {
        let x = x.clamp(0.0, self.width);
        match self.policy {
            CrossingPolicy::ClampToCounterpart => {
                if self.left.dragged {
                    self.left.x = x.min(self.right.x);
                } else if self.right.dragged {
                    self.right.x = x.max(self.left.x);
                }
            }
            CrossingPolicy::SwapOnRelease => {
                if self.left.dragged {
                    self.left.x = x;
                } else if self.right.dragged {
                    self.right.x = x;
                }
            }
        }
    }

    // Pointer released: settle ordering and hand back the pixel window, or
    // None when no drag was live.
    pub fn pointer_up(&mut self) -> Option<(f32, f32)> {
        if !self.left.dragged && !self.right.dragged {
            return None;
        }
        self.left.dragged = false;
        self.right.dragged = false;
        if self.left.x > self.right.x {
            // only reachable under SwapOnRelease
            std::mem::swap(&mut self.left.x, &mut self.right.x);
        }
        Some((self.left.x, self.right.x))
    }

    // Release straight into the store: the settled pixel window becomes the
    // pad's trim window, smaller value first.
    pub fn release_into(&mut self, store: &mut PadStore, pad: usize) {
        let Some((start_px, end_px)) = self.pointer_up() else {
            return;
        };
        let Some(duration) = store
            .get_pad(pad)
            .filter(|p| p.is_loaded())
            .map(|p| p.duration_secs())
        else {
            return;
        };
        store.set_trim_points(
            pad,
            pixel_to_time(start_px, duration, self.width),
            pixel_to_time(end_px, duration, self.width),
        );
    }

    fn distance_to_bar(&self, bar_x: f32, px: f32, py: f32) -> f32 {
        // bars anchor their grab point on the center line
        let dx = px - bar_x;
        let dy = py - self.height / 2.0;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn draw(&self, s: &mut impl Surface) {
        for bar in [&self.left, &self.right] {
            s.stroke_line(bar.x, 0.0, bar.x, self.height);
            let grab = if bar.selected || bar.dragged {
                HANDLE_SIZE * 2.0
            } else {
                HANDLE_SIZE
            };
            s.fill_rect(
                bar.x - grab / 2.0,
                self.height / 2.0 - grab / 2.0,
                grab,
                grab,
            );
        }
    }
}

pub fn pixel_to_time(px: f32, duration: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    px * duration / width
}

pub fn time_to_pixel(t: f32, duration: f32, width: f32) -> f32 {
    if duration <= 0.0 {
        return 0.0;
    }
    t * width / duration
}
