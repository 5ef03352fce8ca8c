//! Wrap-safe millisecond arithmetic and the periodic triggers built on it.

/// True once `now` is at or past `deadline`, allowing for the clock
/// wrapping. Deadlines must be less than ~24 days out.
pub fn reached(now: u32, deadline: u32) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}

/// A periodic trigger polled from the main loop.
///
/// If the loop was blocked for more than one period (animations, tones) the
/// trigger fires once and resynchronises instead of firing a burst.
#[derive(Debug, Clone, Copy)]
pub struct Every {
    period_ms: u32,
    next_ms: u32,
}

impl Every {
    /// First fires one period after `now`.
    pub fn new(period_ms: u32, now: u32) -> Self {
        Self {
            period_ms,
            next_ms: now.wrapping_add(period_ms),
        }
    }

    pub fn due(&mut self, now: u32) -> bool {
        if !reached(now, self.next_ms) {
            return false;
        }
        self.next_ms = self.next_ms.wrapping_add(self.period_ms);
        if reached(now, self.next_ms) {
            self.next_ms = now.wrapping_add(self.period_ms);
        }
        true
    }
}

/// Drops edges that arrive within `window_ms` of the last accepted one.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    window_ms: u32,
    last: Option<u32>,
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last: None,
        }
    }

    pub fn accept(&mut self, now: u32) -> bool {
        if let Some(last) = self.last {
            if now.wrapping_sub(last) < self.window_ms {
                return false;
            }
        }
        self.last = Some(now);
        true
    }
}
