//! What the session needs from the hardware.
//!
//! The firmware implements these on top of the micro:bit peripherals; the
//! tests implement them on a simulated board.

use embedded_hal::delay::DelayNs;

use crate::icons::Icon;

/// Monotonic millisecond clock. Wraps after ~49 days; compare with
/// [`crate::time::reached`].
pub trait Clock {
    fn now_ms(&self) -> u32;
}

/// Ambient sound level, 0 (silent) to 255 (loud).
pub trait Microphone {
    fn ambient_noise(&mut self) -> u8;
}

/// The 5x5 LED grid. `x` is the column, `y` the row, both in `0..5`.
pub trait Screen {
    fn clear(&mut self);
    fn light(&mut self, x: usize, y: usize);
    fn unlight(&mut self, x: usize, y: usize);
    /// Replaces whatever is on the grid with `icon`.
    fn show_icon(&mut self, icon: Icon);
}

pub trait Speaker {
    /// Plays `note` for `duration_ms`, blocking until it is done.
    fn play_tone(&mut self, note: Note, duration_ms: u32);
}

/// Everything a [`crate::Session`] drives. Blanket-implemented.
pub trait Board: Clock + Microphone + Screen + Speaker + DelayNs {}

impl<T> Board for T where T: Clock + Microphone + Screen + Speaker + DelayNs {}

/// Notes used by the chimes and the noise alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    /// C4, alert and nag
    C,
    /// D4
    D,
    /// G4
    G,
}

impl Note {
    pub const fn hz(self) -> u32 {
        match self {
            Note::C => 262,
            Note::D => 294,
            Note::G => 392,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chime_rises() {
        assert!(Note::C.hz() < Note::D.hz());
        assert!(Note::D.hz() < Note::G.hz());
    }
}
