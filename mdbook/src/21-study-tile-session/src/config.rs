//! Compile-time tuning.
//!
//! The demo timings compress one minute of study into half a second, so a
//! full block takes 12.5 s and a break 2.5 s.

// Session timing

/// Side length of the LED grid.
pub const GRID_SIZE: usize = 5;
/// One step per LED.
pub const TOTAL_STEPS: usize = GRID_SIZE * GRID_SIZE;
/// Countdown tick, one LED goes out per tick.
pub const TICK_MS: u32 = 500;
/// Nag tone interval while the noise hold persists.
pub const NAG_INTERVAL_MS: u32 = 1_000;
/// Deadline poll for the tap window and the break.
pub const POLL_MS: u32 = 200;
/// Gap between the intro animation and the first tick of a block.
pub const POST_INTRO_DELAY_MS: u32 = 1_000;
/// Gap between the outro animation and the checkmark.
pub const PRE_CHECKMARK_DELAY_MS: u32 = 1_000;
/// How long the checkmark stays up.
pub const CHECKMARK_HOLD_MS: u32 = 500;
/// One frame of the intro/outro animation.
pub const ANIMATION_FRAME_MS: u32 = 120;
/// Break between blocks.
pub const BREAK_MS: u32 = 2_500;
/// Window after power-on in which extra taps select the block count.
pub const TAP_WINDOW_MS: u32 = 5_000;
/// Upper bound on blocks, so a stuck finger can't queue up an afternoon.
pub const MAX_BLOCKS: u8 = 10;

// Noise

/// Sound level (0-255) at or above which the countdown is held.
pub const NOISE_THRESHOLD: u8 = 100;

// Microphone scaling

/// Number of SAADC samples per sound level reading.
pub const MIC_SAMPLE_COUNT: usize = 32;
/// Delay between microphone samples.
pub const MIC_SAMPLE_SPACING_US: u32 = 100;
/// Peak-to-peak amplitude below which the room counts as silent.
pub const MIC_QUIET_FLOOR: i16 = 5;
/// Peak-to-peak amplitude above the floor that maps to level 255.
pub const MIC_FULL_SCALE: i16 = 150;

// Tones

/// One sixteenth of a beat at 120 bpm.
pub const SIXTEENTH_MS: u32 = 125;

// Buttons

/// Edges closer together than this on the same button are bounce.
pub const DEBOUNCE_MS: u32 = 50;
