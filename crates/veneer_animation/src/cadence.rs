//! Redraw cadence

/// Milliseconds between two dispatcher ticks
pub const TICK_RATE_MS: u32 = 10;

/// Milliseconds between two redraw requests
pub const FRAME_INTERVAL_MS: u32 = 50;

/// Accumulates elapsed tick time and reports when a frame is due
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCadence {
    frames: u32,
    rate: u32,
    interval: u32,
}

impl FrameCadence {
    /// `interval` should be a multiple of `rate`
    pub const fn new(rate: u32, interval: u32) -> Self {
        Self {
            frames: 0,
            rate,
            interval,
        }
    }

    /// Account for one tick; returns `true` when a redraw is due
    pub fn advance(&mut self) -> bool {
        self.frames += self.rate;
        if self.frames >= self.interval {
            self.frames = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.frames = 0;
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }
}

impl Default for FrameCadence {
    fn default() -> Self {
        Self::new(TICK_RATE_MS, FRAME_INTERVAL_MS)
    }
}
