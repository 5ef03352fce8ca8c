//! Noise interlock and microphone scaling.

use crate::config::{MIC_FULL_SCALE, MIC_QUIET_FLOOR};

/// What one noise sample means for the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// Below threshold and no hold was active.
    Quiet,
    /// Below threshold, ending an excursion.
    Cleared,
    /// At or above threshold. `alert` is set on the first sample of an
    /// excursion only.
    Loud { alert: bool },
}

/// Tracks excursions above the threshold so that each one alerts once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseInterlock {
    threshold: u8,
    held: bool,
    acknowledged: bool,
}

impl NoiseInterlock {
    pub const fn new(threshold: u8) -> Self {
        Self {
            threshold,
            held: false,
            acknowledged: false,
        }
    }

    pub fn observe(&mut self, level: u8) -> Reading {
        if level >= self.threshold {
            if !self.held {
                self.held = true;
                self.acknowledged = false;
            }
            let alert = !self.acknowledged;
            self.acknowledged = true;
            Reading::Loud { alert }
        } else if self.held {
            self.reset();
            Reading::Cleared
        } else {
            Reading::Quiet
        }
    }

    pub fn reset(&mut self) {
        self.held = false;
        self.acknowledged = false;
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }
}

/// Maps a microphone peak-to-peak amplitude onto the 0-255 sound level.
pub fn sound_level(amplitude: i16) -> u8 {
    if amplitude < MIC_QUIET_FLOOR {
        return 0;
    }
    let scaled = (amplitude as i32 - MIC_QUIET_FLOOR as i32) * 255 / MIC_FULL_SCALE as i32;
    scaled.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_alert_per_excursion() {
        let mut interlock = NoiseInterlock::new(100);
        assert_eq!(interlock.observe(150), Reading::Loud { alert: true });
        assert!(interlock.is_acknowledged());
        for _ in 0..5 {
            assert_eq!(interlock.observe(200), Reading::Loud { alert: false });
        }
        assert_eq!(interlock.observe(10), Reading::Cleared);
        assert!(!interlock.is_acknowledged());
        assert_eq!(interlock.observe(10), Reading::Quiet);

        // A new excursion alerts again.
        assert_eq!(interlock.observe(100), Reading::Loud { alert: true });
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut interlock = NoiseInterlock::new(100);
        assert_eq!(interlock.observe(99), Reading::Quiet);
        assert!(matches!(interlock.observe(100), Reading::Loud { .. }));
    }

    #[test]
    fn reset_forgets_excursion() {
        let mut interlock = NoiseInterlock::new(100);
        interlock.observe(180);
        interlock.reset();
        assert_eq!(interlock.observe(180), Reading::Loud { alert: true });
    }

    #[test]
    fn sound_level_scaling() {
        assert_eq!(sound_level(0), 0);
        assert_eq!(sound_level(MIC_QUIET_FLOOR - 1), 0);
        assert_eq!(sound_level(MIC_QUIET_FLOOR), 0);
        assert_eq!(sound_level(MIC_QUIET_FLOOR + MIC_FULL_SCALE), 255);
        assert_eq!(sound_level(i16::MAX), 255);
        assert!(sound_level(MIC_QUIET_FLOOR + MIC_FULL_SCALE / 2) > 100);
    }
}
