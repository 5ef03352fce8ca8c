//! The shrinking countdown on the grid.
//!
//! Cells are numbered row-major. At step `n`, cells `n..TOTAL_STEPS` are lit
//! and cells `0..n` are dark, so the grid empties from the top-left corner.

use crate::board::Screen;
use crate::config::{GRID_SIZE, TOTAL_STEPS};

/// `(x, y)` of cell `index`.
pub const fn cell(index: usize) -> (usize, usize) {
    (index % GRID_SIZE, index / GRID_SIZE)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    step: usize,
}

impl Progress {
    pub const fn new() -> Self {
        Self { step: 0 }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_complete(&self) -> bool {
        self.step >= TOTAL_STEPS
    }

    pub fn is_lit(&self, index: usize) -> bool {
        index >= self.step && index < TOTAL_STEPS
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }

    /// Draws the whole lit set from scratch, e.g. after an icon covered it.
    pub fn redraw<S: Screen>(&self, screen: &mut S) {
        screen.clear();
        for index in self.step..TOTAL_STEPS {
            let (x, y) = cell(index);
            screen.light(x, y);
        }
    }

    /// Turns off the next cell. Returns true when that was the last one.
    pub fn advance<S: Screen>(&mut self, screen: &mut S) -> bool {
        if self.is_complete() {
            return true;
        }
        let (x, y) = cell(self.step);
        screen.unlight(x, y);
        self.step += 1;
        self.is_complete()
    }
}
