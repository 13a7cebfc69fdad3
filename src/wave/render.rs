use super::surface::Surface;

// Paint the envelope as one closed shape mirrored around the center line.
pub fn draw_waveform(s: &mut impl Surface, width: f32, height: f32, peaks: &[f32]) {
    s.clear_rect(0.0, 0.0, width, height);
    let half = height / 2.0;
    s.stroke_line(0.0, half, width, half);

    if peaks.is_empty() {
        return;
    }
    let max = peaks.iter().copied().fold(0.0f32, f32::max);
    if max <= 0.0 {
        // silent sample: the center line is the whole waveform
        return;
    }
    let scale = half / max;

    let mut points = Vec::with_capacity(peaks.len() * 2);
    for (i, p) in peaks.iter().enumerate() {
        points.push((i as f32, half - (p * scale).round()));
    }
    for (i, p) in peaks.iter().enumerate().rev() {
        points.push((i as f32, half + (p * scale).round()));
    }
    s.fill_polygon(&points);
}

// Shown while the extractor is still chewing on the sample: center line plus
// a stub bar, so the panel never sits blank or stale.
pub fn draw_loading(s: &mut impl Surface, width: f32, height: f32) {
    s.clear_rect(0.0, 0.0, width, height);
    let half = height / 2.0;
    s.stroke_line(0.0, half, width, half);
    s.fill_rect(width * 0.25, half - 1.0, width * 0.5, 2.0);
}

// Nothing loaded on the pad at all.
pub fn draw_empty(s: &mut impl Surface, width: f32, height: f32) {
    s.clear_rect(0.0, 0.0, width, height);
    s.stroke_line(0.0, height / 2.0, width, height / 2.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::surface::recording::{Op, RecordingSurface};

    #[test]
    fn test_silent_envelope_draws_flat_line_only() {
        let mut s = RecordingSurface::default();
        draw_waveform(&mut s, 100.0, 40.0, &[0.0; 100]);
        assert_eq!(
            s.ops,
            vec![
                Op::Clear(0.0, 0.0, 100.0, 40.0),
                Op::Line(0.0, 20.0, 100.0, 20.0),
            ]
        );
    }

    #[test]
    fn test_envelope_fills_one_closed_polygon() {
        let mut s = RecordingSurface::default();
        draw_waveform(&mut s, 4.0, 40.0, &[0.25, 0.5, 1.0, 0.5]);
        let Some(Op::Polygon(points)) = s.ops.last() else {
            panic!("no polygon drawn: {:?}", s.ops);
        };
        assert_eq!(points.len(), 8);
        // the loudest column spans the full height
        assert_eq!(points[2], (2.0, 0.0));
        assert_eq!(points[5], (2.0, 40.0));
        // mirror symmetry around the center line
        assert_eq!(points[0].1 + points[7].1, 40.0);
    }

    #[test]
    fn test_loading_placeholder_is_not_blank() {
        let mut s = RecordingSurface::default();
        draw_loading(&mut s, 100.0, 40.0);
        assert!(s.ops.iter().any(|op| matches!(op, Op::FillRect(..))));
    }
}
