#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use study_tile_session::config::{GRID_SIZE, TOTAL_STEPS};
use study_tile_session::progress::cell;
use study_tile_session::{Clock, Icon, Microphone, Note, Screen, Session, Speaker};

/// Simulated micro:bit. Delays and tones move the clock forward, the grid
/// and everything played are recorded.
#[derive(Default)]
pub struct SimBoard {
    pub now: u32,
    pub noise: u8,
    pub leds: [[bool; GRID_SIZE]; GRID_SIZE],
    pub icon: Option<Icon>,
    pub icons: Vec<Icon>,
    pub tones: Vec<Note>,
    pub clears: usize,
    ns_carry: u32,
}

impl SimBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
    }

    pub fn lit(&self) -> usize {
        self.leds.iter().flatten().filter(|&&on| on).count()
    }

    /// True when the grid shows exactly the countdown at `step`.
    pub fn shows_step(&self, step: usize) -> bool {
        self.icon.is_none()
            && (0..TOTAL_STEPS).all(|i| {
                let (x, y) = cell(i);
                self.leds[y][x] == (i >= step)
            })
    }

    pub fn is_dark(&self) -> bool {
        self.lit() == 0
    }

    pub fn tones_of(&self, note: Note) -> usize {
        self.tones.iter().filter(|&&n| n == note).count()
    }
}

impl Clock for SimBoard {
    fn now_ms(&self) -> u32 {
        self.now
    }
}

impl Microphone for SimBoard {
    fn ambient_noise(&mut self) -> u8 {
        self.noise
    }
}

impl Screen for SimBoard {
    fn clear(&mut self) {
        self.leds = Default::default();
        self.icon = None;
        self.clears += 1;
    }

    fn light(&mut self, x: usize, y: usize) {
        self.leds[y][x] = true;
    }

    fn unlight(&mut self, x: usize, y: usize) {
        self.leds[y][x] = false;
    }

    fn show_icon(&mut self, icon: Icon) {
        let pattern = icon.pattern();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                self.leds[y][x] = pattern[y][x] > 0;
            }
        }
        self.icon = Some(icon);
        self.icons.push(icon);
    }
}

impl Speaker for SimBoard {
    fn play_tone(&mut self, note: Note, duration_ms: u32) {
        self.tones.push(note);
        self.advance(duration_ms);
    }
}

impl DelayNs for SimBoard {
    fn delay_ns(&mut self, ns: u32) {
        let total = self.ns_carry as u64 + ns as u64;
        self.advance((total / 1_000_000) as u32);
        self.ns_carry = (total % 1_000_000) as u32;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.advance(ms);
    }
}

/// Powers on, taps `taps` times and lets the window close.
pub fn start_session(session: &mut Session, board: &mut SimBoard, taps: usize) {
    session.primary_button(board);
    for _ in 0..taps {
        board.advance(100);
        session.primary_button(board);
    }
    board.advance(study_tile_session::config::TAP_WINDOW_MS);
    session.poll(board);
}

/// Ticks from the current step up to `step`. Reaching `TOTAL_STEPS` ends
/// the block, after which the step may read 0 again.
pub fn run_to_step(session: &mut Session, board: &mut SimBoard, step: usize) {
    for _ in session.step()..step {
        board.advance(study_tile_session::config::TICK_MS);
        session.tick(board);
    }
}
