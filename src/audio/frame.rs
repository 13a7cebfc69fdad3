// The smallest unit of audio; one stereo frame.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StereoFrame {
    pub left: f32,
    pub right: f32,
}

impl StereoFrame {
    pub fn zero() -> Self {
        // just giving `default` a better name for clarity
        Self::default()
    }

    pub fn splat(x: f32) -> Self {
        Self { left: x, right: x }
    }
}
