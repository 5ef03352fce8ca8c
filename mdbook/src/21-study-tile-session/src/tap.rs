//! Block-count selection by tapping during the window after power-on.

use crate::config::{MAX_BLOCKS, TAP_WINDOW_MS};
use crate::time::reached;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapWindow {
    taps: u8,
    closes_at: u32,
}

impl TapWindow {
    pub fn open(now: u32) -> Self {
        Self {
            taps: 0,
            closes_at: now.wrapping_add(TAP_WINDOW_MS),
        }
    }

    /// Counts a tap. Taps past [`MAX_BLOCKS`] are ignored; returns whether
    /// this one counted.
    pub fn tap(&mut self) -> bool {
        if self.taps >= MAX_BLOCKS {
            return false;
        }
        self.taps += 1;
        true
    }

    pub fn taps(&self) -> u8 {
        self.taps
    }

    pub fn is_closed(&self, now: u32) -> bool {
        reached(now, self.closes_at)
    }

    /// Number of blocks to run. No taps still means one block.
    pub fn selected_blocks(&self) -> u8 {
        blocks_for_taps(self.taps)
    }
}

pub fn blocks_for_taps(taps: u8) -> u8 {
    taps.clamp(1, MAX_BLOCKS)
}
