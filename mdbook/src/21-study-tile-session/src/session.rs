//! The session state machine.
//!
//! ```text
//! Idle -> TapWindow -> IntroAnim -> Running <-> NoiseHold
//!                          ^          |  ^          |
//!                          |          v  |          v
//!                        Break <- OutroAnim      Paused
//! ```
//!
//! Every handler runs to completion. The caller feeds it four kinds of event:
//! button edges, the countdown tick ([`TICK_MS`]), the nag tick
//! ([`NAG_INTERVAL_MS`]) and the deadline poll ([`POLL_MS`]). Animations,
//! chimes and the post-intro gap block inside the handler that starts them.
//!
//! [`TICK_MS`]: crate::config::TICK_MS
//! [`NAG_INTERVAL_MS`]: crate::config::NAG_INTERVAL_MS
//! [`POLL_MS`]: crate::config::POLL_MS

use crate::board::{Board, Note};
use crate::config::{
    ANIMATION_FRAME_MS, BREAK_MS, CHECKMARK_HOLD_MS, NOISE_THRESHOLD, POST_INTRO_DELAY_MS,
    PRE_CHECKMARK_DELAY_MS, SIXTEENTH_MS,
};
use crate::icons::Icon;
use crate::noise::{NoiseInterlock, Reading};
use crate::progress::Progress;
use crate::tap::TapWindow;
use crate::time::reached;

const INTRO: [Icon; 3] = [Icon::SmallDiamond, Icon::Diamond, Icon::Square];
const OUTRO: [Icon; 3] = [Icon::Square, Icon::Diamond, Icon::SmallDiamond];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Powered off.
    Idle,
    /// Counting taps to pick the number of blocks.
    TapWindow(TapWindow),
    IntroAnim,
    Running,
    /// Countdown frozen because the room is loud.
    NoiseHold,
    Paused,
    OutroAnim,
    /// Between blocks until `ends_at`.
    Break { ends_at: u32 },
}

#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    /// Blocks left, counting the one in progress.
    blocks_remaining: u8,
    progress: Progress,
    noise: NoiseInterlock,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            blocks_remaining: 0,
            progress: Progress::new(),
            noise: NoiseInterlock::new(NOISE_THRESHOLD),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_powered_on(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn blocks_remaining(&self) -> u8 {
        self.blocks_remaining
    }

    pub fn step(&self) -> usize {
        self.progress.step()
    }

    /// Taps counted so far; zero outside the tap window.
    pub fn tap_count(&self) -> u8 {
        match self.phase {
            Phase::TapWindow(window) => window.taps(),
            _ => 0,
        }
    }

    pub fn is_noise_acknowledged(&self) -> bool {
        self.noise.is_acknowledged()
    }

    /// Button A: power on when off, count a tap in the tap window, power off
    /// otherwise.
    pub fn primary_button<B: Board>(&mut self, board: &mut B) {
        if let Phase::TapWindow(window) = &mut self.phase {
            if window.tap() {
                trace!("tap {}", window.taps());
            }
            return;
        }
        if self.is_powered_on() {
            self.power_off(board);
        } else {
            self.power_on(board);
        }
    }

    /// Button B: toggles pause during a block, ignored everywhere else.
    pub fn secondary_button<B: Board>(&mut self, board: &mut B) {
        match self.phase {
            Phase::Running | Phase::NoiseHold => self.pause(board),
            Phase::Paused => self.resume(board),
            _ => {}
        }
    }

    pub fn power_on<B: Board>(&mut self, board: &mut B) {
        if self.is_powered_on() {
            return;
        }
        *self = Self::new();
        self.phase = Phase::TapWindow(TapWindow::open(board.now_ms()));
        trace!("power on, tap window open");
    }

    /// Drops everything and goes dark. Works from any phase.
    pub fn power_off<B: Board>(&mut self, board: &mut B) {
        *self = Self::new();
        board.clear();
        trace!("power off");
    }

    pub fn pause<B: Board>(&mut self, board: &mut B) {
        if !matches!(self.phase, Phase::Running | Phase::NoiseHold) {
            return;
        }
        self.phase = Phase::Paused;
        board.show_icon(Icon::Pause);
        trace!("paused at step {}", self.progress.step());
    }

    /// Leaves [`Phase::Paused`] for `Running` or `NoiseHold`, whichever a
    /// fresh noise sample calls for.
    pub fn resume<B: Board>(&mut self, board: &mut B) {
        if self.phase != Phase::Paused {
            return;
        }
        self.settle(board);
        trace!("resumed as {:?}", self.phase);
    }

    /// Countdown tick: samples noise and, if quiet, turns off one LED.
    pub fn tick<B: Board>(&mut self, board: &mut B) {
        if !matches!(self.phase, Phase::Running | Phase::NoiseHold) {
            return;
        }
        match self.noise.observe(board.ambient_noise()) {
            Reading::Loud { alert } => {
                if self.phase == Phase::Running {
                    self.hold(board, alert);
                }
            }
            Reading::Cleared => {
                self.restore(board);
                self.count_down(board);
            }
            Reading::Quiet => self.count_down(board),
        }
    }

    fn count_down<B: Board>(&mut self, board: &mut B) {
        if self.progress.advance(board) {
            self.finish_block(board);
        }
    }

    /// Nag tick: beeps for as long as the noise hold lasts.
    pub fn nag_tick<B: Board>(&mut self, board: &mut B) {
        if self.phase == Phase::NoiseHold {
            board.play_tone(Note::C, SIXTEENTH_MS);
        }
    }

    /// Deadline poll for the tap window and the break.
    pub fn poll<B: Board>(&mut self, board: &mut B) {
        let now = board.now_ms();
        match self.phase {
            Phase::TapWindow(window) if window.is_closed(now) => {
                self.blocks_remaining = window.selected_blocks();
                trace!("{} blocks selected", self.blocks_remaining);
                self.begin_block(board);
            }
            Phase::Break { ends_at } if reached(now, ends_at) => {
                if self.blocks_remaining > 0 {
                    self.begin_block(board);
                } else {
                    self.power_off(board);
                }
            }
            _ => {}
        }
    }

    fn begin_block<B: Board>(&mut self, board: &mut B) {
        self.progress.reset();
        self.noise.reset();
        self.phase = Phase::IntroAnim;
        trace!("block start, {} remaining", self.blocks_remaining);

        animate(board, &INTRO);
        chime(board);
        board.delay_ms(POST_INTRO_DELAY_MS);
        self.settle(board);
    }

    fn finish_block<B: Board>(&mut self, board: &mut B) {
        self.phase = Phase::OutroAnim;
        trace!("block done");

        animate(board, &OUTRO);
        board.delay_ms(PRE_CHECKMARK_DELAY_MS);
        chime(board);
        board.show_icon(Icon::Yes);
        board.delay_ms(CHECKMARK_HOLD_MS);
        board.clear();

        self.blocks_remaining = self.blocks_remaining.saturating_sub(1);
        if self.blocks_remaining > 0 {
            self.start_break(board);
        } else {
            self.power_off(board);
        }
    }

    fn start_break<B: Board>(&mut self, board: &mut B) {
        self.noise.reset();
        board.clear();
        let ends_at = board.now_ms().wrapping_add(BREAK_MS);
        self.phase = Phase::Break { ends_at };
        trace!("break until {}", ends_at);
    }

    // Fresh noise sample decides between Running and NoiseHold.
    fn settle<B: Board>(&mut self, board: &mut B) {
        match self.noise.observe(board.ambient_noise()) {
            Reading::Loud { alert } => self.hold(board, alert),
            Reading::Quiet | Reading::Cleared => self.restore(board),
        }
    }

    fn hold<B: Board>(&mut self, board: &mut B, alert: bool) {
        self.phase = Phase::NoiseHold;
        board.show_icon(Icon::No);
        if alert {
            board.play_tone(Note::C, SIXTEENTH_MS);
        }
        trace!("noise hold at step {}", self.progress.step());
    }

    fn restore<B: Board>(&mut self, board: &mut B) {
        self.phase = Phase::Running;
        self.progress.redraw(board);
    }
}

fn animate<B: Board>(board: &mut B, frames: &[Icon]) {
    for &frame in frames {
        board.show_icon(frame);
        board.delay_ms(ANIMATION_FRAME_MS);
    }
    board.clear();
}

fn chime<B: Board>(board: &mut B) {
    board.play_tone(Note::D, SIXTEENTH_MS);
    board.play_tone(Note::G, SIXTEENTH_MS);
}
