// Incremental amplitude-envelope extraction.
//
// A PeakJob walks the buffer in pixel-column order, a bounded run of columns
// per step() call, so a multi-megabyte sample never stalls the draw loop.
// One column = the mean of the two channels' max |sample| over that column's
// block of frames.

use crate::audio::{SampleBuffer, StereoFrame};

// columns handled per step() call
pub const PEAK_CHUNK_COLUMNS: usize = 64;

// blocks longer than this get subsampled so a single column stays cheap even
// on absurdly long buffers
pub const PEAK_BLOCK_STRIDE_LIMIT: usize = 4096;

pub struct PeakJob {
    width: usize,
    next_col: usize,
    peaks: Vec<f32>,
}

impl PeakJob {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            next_col: 0,
            peaks: Vec::with_capacity(width),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_done(&self) -> bool {
        self.next_col >= self.width
    }

    // Chew through the next run of columns. Returns true once the whole
    // envelope is ready.
    pub fn step(&mut self, buffer: &SampleBuffer) -> bool {
        if self.width == 0 {
            return true;
        }
        let len = buffer.data.len();
        let block = len.div_ceil(self.width).max(1);

        let stop = (self.next_col + PEAK_CHUNK_COLUMNS).min(self.width);
        while self.next_col < stop {
            let start = self.next_col * block;
            let end = ((self.next_col + 1) * block).min(len);
            let peak = if start >= len {
                0.0
            } else {
                column_peak(&buffer.data, start, end)
            };
            self.peaks.push(peak);
            self.next_col += 1;
        }
        self.is_done()
    }

    pub fn into_peaks(self) -> Vec<f32> {
        self.peaks
    }
}

fn column_peak(data: &[StereoFrame], start: usize, end: usize) -> f32 {
    let stride = ((end - start) / PEAK_BLOCK_STRIDE_LIMIT).max(1);
    let mut left: f32 = 0.0;
    let mut right: f32 = 0.0;
    let mut i = start;
    while i < end {
        let f = data[i];
        left = left.max(f.left.abs());
        right = right.max(f.right.abs());
        i += stride;
    }
    (left + right) * 0.5
}
